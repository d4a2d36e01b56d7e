use crate::models::alert::AlertKind;
use crate::models::enums::ActionRequired;

/// Clinician-facing alert wording. Spanish is the primary locale of the
/// upstream clinics; any other language code falls back to English.
pub struct AlertMessages;

impl AlertMessages {
    /// Headline message for an alert.
    pub fn message(kind: AlertKind, action: ActionRequired, lang: &str) -> String {
        let core = match (action, lang) {
            (ActionRequired::StopImmediately, "es") => {
                "Riesgo crítico detectado durante la técnica. Detenga la intervención \
                 inmediatamente y reevalúe al paciente."
            }
            (ActionRequired::StopImmediately, _) => {
                "Critical risk detected during the technique. Stop the intervention \
                 immediately and reassess the patient."
            }
            (ActionRequired::Caution, "es") => {
                "Riesgo moderado detectado. Revise la técnica antes de continuar."
            }
            (ActionRequired::Caution, _) => {
                "Moderate risk detected. Review the technique before continuing."
            }
            (ActionRequired::Monitor, "es") => {
                "Señal leve detectada. Continúe con vigilancia."
            }
            (ActionRequired::Monitor, _) => "Minor signal detected. Continue with monitoring.",
            (ActionRequired::Inform, "es") => "Hallazgo informativo registrado.",
            (ActionRequired::Inform, _) => "Informational finding recorded.",
        };

        match (kind, lang) {
            (AlertKind::RedFlag, "es") | (AlertKind::Combined, "es") => format!(
                "{core} Posible bandera roja clínica: considere derivación médica."
            ),
            (AlertKind::RedFlag, _) | (AlertKind::Combined, _) => {
                format!("{core} Possible clinical red flag: consider medical referral.")
            }
            (AlertKind::IatrogenicRisk, _) => core.to_string(),
        }
    }

    /// Suggested actions for the required action level.
    pub fn recommendations(action: ActionRequired, lang: &str) -> Vec<String> {
        let items: &[&str] = match (action, lang) {
            (ActionRequired::StopImmediately, "es") => &[
                "Detener la técnica de inmediato",
                "Reevaluar el estado neurovascular del paciente",
                "Documentar el incidente en la historia clínica",
                "Valorar derivación urgente",
            ],
            (ActionRequired::StopImmediately, _) => &[
                "Stop the technique immediately",
                "Reassess the patient's neurovascular status",
                "Document the incident in the clinical record",
                "Consider urgent referral",
            ],
            (ActionRequired::Caution, "es") => &[
                "Reducir la intensidad de la técnica",
                "Confirmar tolerancia con el paciente antes de continuar",
            ],
            (ActionRequired::Caution, _) => &[
                "Reduce the intensity of the technique",
                "Confirm patient tolerance before continuing",
            ],
            (ActionRequired::Monitor, "es") => &["Continuar con vigilancia del síntoma"],
            (ActionRequired::Monitor, _) => &["Keep monitoring the symptom"],
            (ActionRequired::Inform, "es") => &["Registrar el hallazgo en la nota de la sesión"],
            (ActionRequired::Inform, _) => &["Record the finding in the session note"],
        };
        items.iter().map(|s| s.to_string()).collect()
    }
}
