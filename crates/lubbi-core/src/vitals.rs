//! Threshold check on a pair of vital signs.

use serde::{Deserialize, Serialize};

/// Above this body temperature (°C) the reading is flagged.
pub const FEVER_THRESHOLD_C: f64 = 37.5;
/// Normal resting heart rate band, inclusive, in BPM.
pub const HEART_RATE_MIN_BPM: f64 = 60.0;
pub const HEART_RATE_MAX_BPM: f64 = 100.0;

pub const NORMAL_ANALYSIS: &str = "Sinais vitais dentro dos parâmetros normais.";
pub const FEVER_ANALYSIS: &str = "Temperatura elevada detectada. Recomenda-se avaliação médica.";
pub const HEART_RATE_ANALYSIS: &str =
    "Frequência cardíaca fora da faixa normal. Monitorar continuamente.";

const RECOMMENDATIONS: [&str; 3] = [
    "Manter repouso",
    "Hidratação adequada",
    "Monitoramento contínuo",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsAnalysis {
    pub analysis: String,
    pub alert: bool,
    pub recommendations: Vec<String>,
}

/// Flags a fever or an out-of-band heart rate. When both are off, the heart-rate
/// message wins. Absent values never raise an alert.
pub fn analyze(temperature: Option<f64>, heart_rate: Option<f64>) -> VitalsAnalysis {
    let mut analysis = NORMAL_ANALYSIS;
    let mut alert = false;

    if temperature.is_some_and(|t| t > FEVER_THRESHOLD_C) {
        analysis = FEVER_ANALYSIS;
        alert = true;
    }

    if heart_rate.is_some_and(|b| !(HEART_RATE_MIN_BPM..=HEART_RATE_MAX_BPM).contains(&b)) {
        analysis = HEART_RATE_ANALYSIS;
        alert = true;
    }

    VitalsAnalysis {
        analysis: analysis.to_string(),
        alert,
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fever_alerts() {
        let result = analyze(Some(38.0), Some(70.0));
        assert!(result.alert);
        assert_eq!(result.analysis, FEVER_ANALYSIS);
    }

    #[test]
    fn test_normal_range() {
        let result = analyze(Some(36.5), Some(72.0));
        assert!(!result.alert);
        assert_eq!(result.analysis, NORMAL_ANALYSIS);
        assert_eq!(
            result.recommendations,
            vec!["Manter repouso", "Hidratação adequada", "Monitoramento contínuo"]
        );
    }

    #[test]
    fn test_band_edges_are_normal() {
        assert!(!analyze(Some(37.5), Some(60.0)).alert);
        assert!(!analyze(None, Some(100.0)).alert);
    }

    #[test]
    fn test_heart_rate_out_of_band_alerts() {
        assert_eq!(analyze(None, Some(55.0)).analysis, HEART_RATE_ANALYSIS);
        assert!(analyze(Some(36.0), Some(101.0)).alert);
    }

    #[test]
    fn test_heart_rate_message_wins_over_fever() {
        let result = analyze(Some(39.0), Some(120.0));
        assert!(result.alert);
        assert_eq!(result.analysis, HEART_RATE_ANALYSIS);
    }

    #[test]
    fn test_absent_values_do_not_alert() {
        assert!(!analyze(None, None).alert);
    }
}
