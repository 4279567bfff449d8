//! Energy and length constants
//!
//! Fixed conversion factors used by the calculator.

// ============================================================================
// Energy Density (kcal per gram)
// ============================================================================

/// Kilocalories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Kilocalories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Kilocalories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ============================================================================
// Length
// ============================================================================

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

// ============================================================================
// Goal Adjustment
// ============================================================================

/// Daily kcal removed for weight loss / added for weight gain
pub const GOAL_CALORIE_ADJUSTMENT: f64 = 500.0;

/// Convert centimeters to meters
pub fn cm_to_m(cm: f64) -> f64 {
    cm / CM_PER_M
}

/// Energy in kcal for the given macro grams
pub fn macro_kcal(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    protein_g * KCAL_PER_G_PROTEIN + carbs_g * KCAL_PER_G_CARBS + fat_g * KCAL_PER_G_FAT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_m() {
        assert!((cm_to_m(175.0) - 1.75).abs() < 1e-12);
        assert_eq!(cm_to_m(0.0), 0.0);
    }

    #[test]
    fn test_macro_kcal() {
        // 10g protein + 20g carbs + 5g fat = 40 + 80 + 45
        assert!((macro_kcal(10.0, 20.0, 5.0) - 165.0).abs() < 1e-9);
    }
}
