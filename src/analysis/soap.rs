use crate::models::entity::{ChecklistSignal, ClinicalEntity};
use crate::models::enums::SignalTag;
use crate::models::note::{NoteStatus, SoapNote, SoapSections};

/// Map pre-tagged entities to checklist signals.
///
/// Entities outside the structurable set and entities with blank text are
/// dropped, not rejected: the NLP upstream is an external, occasionally
/// noisy collaborator. `None` yields `[]`.
pub fn to_checklist(entities: Option<&[ClinicalEntity]>) -> Vec<ChecklistSignal> {
    let Some(entities) = entities else {
        return Vec::new();
    };

    entities
        .iter()
        .filter_map(|entity| {
            let tag = SignalTag::from_entity_kind(entity.kind)?;
            let text = entity.text.trim();
            if text.is_empty() {
                return None;
            }
            Some(ChecklistSignal {
                speaker: entity.speaker(),
                text: text.to_string(),
                tag,
            })
        })
        .collect()
}

/// Build a SOAP note from checklist signals in one deterministic pass.
///
/// Bucketing: symptom → subjective; finding, test → objective; diagnosis →
/// assessment; intervention, plan → plan. Input order is preserved per
/// section and repeated text is kept. Every call produces a fresh note.
pub fn build_note(signals: &[ChecklistSignal], locale: &str) -> SoapNote {
    let mut sections = SoapSections::default();

    for signal in signals {
        let bucket = match signal.tag {
            SignalTag::Symptom => &mut sections.subjective,
            SignalTag::Finding | SignalTag::Test => &mut sections.objective,
            SignalTag::Diagnosis => &mut sections.assessment,
            SignalTag::Intervention | SignalTag::Plan => &mut sections.plan,
        };
        bucket.push(signal.text.clone());
    }

    SoapNote {
        sections,
        locale: locale.to_string(),
    }
}

/// Presentation-facing note state, derived purely from input presence.
pub fn note_status(entities: Option<&[ClinicalEntity]>) -> NoteStatus {
    match entities {
        None => NoteStatus::Pending,
        Some(list) => {
            if to_checklist(Some(list)).is_empty() {
                NoteStatus::Empty
            } else {
                NoteStatus::Ready
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{EntityKind, Speaker};

    fn entity(kind: EntityKind, text: &str, actor: Option<&str>) -> ClinicalEntity {
        ClinicalEntity {
            kind,
            text: text.to_string(),
            actor: actor.map(str::to_string),
        }
    }

    // =================================================================
    // CHECKLIST MAPPING
    // =================================================================

    #[test]
    fn none_input_yields_empty_checklist() {
        assert!(to_checklist(None).is_empty());
    }

    #[test]
    fn empty_list_yields_empty_checklist() {
        assert!(to_checklist(Some(&[])).is_empty());
    }

    #[test]
    fn non_structurable_kinds_are_dropped() {
        let entities = [
            entity(EntityKind::Medication, "ibuprofeno 400mg", Some("clinician")),
            entity(EntityKind::Observation, "paciente colaborador", None),
            entity(EntityKind::Other, "ruido de fondo", None),
        ];
        assert!(to_checklist(Some(&entities)).is_empty());
    }

    #[test]
    fn blank_text_is_dropped_after_trim() {
        let entities = [
            entity(EntityKind::Symptom, "   ", Some("patient")),
            entity(EntityKind::Symptom, "\tdolor de cadera \n", Some("patient")),
        ];
        let signals = to_checklist(Some(&entities));
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].text, "dolor de cadera");
    }

    #[test]
    fn output_never_longer_than_input() {
        let entities = [
            entity(EntityKind::Symptom, "dolor", Some("patient")),
            entity(EntityKind::Medication, "paracetamol", None),
            entity(EntityKind::Plan, "ejercicios", Some("clinician")),
        ];
        let signals = to_checklist(Some(&entities));
        assert!(signals.len() <= entities.len());
        assert_eq!(signals.len(), 2);
    }

    #[test]
    fn actor_maps_to_speaker_with_other_fallback() {
        let entities = [
            entity(EntityKind::Finding, "ROM limitado", Some("clinician")),
            entity(EntityKind::Symptom, "rigidez matinal", Some("family_member")),
        ];
        let signals = to_checklist(Some(&entities));
        assert_eq!(signals[0].speaker, Speaker::Clinician);
        assert_eq!(signals[1].speaker, Speaker::Other);
    }

    // =================================================================
    // NOTE ASSEMBLY
    // =================================================================

    #[test]
    fn symptom_and_plan_bucket_correctly() {
        let entities = [
            entity(EntityKind::Symptom, "Right hip pain", Some("patient")),
            entity(EntityKind::Plan, "Start ROM exercises", Some("clinician")),
        ];
        let note = build_note(&to_checklist(Some(&entities)), "en");
        assert_eq!(note.sections.subjective, vec!["Right hip pain"]);
        assert_eq!(note.sections.plan, vec!["Start ROM exercises"]);
        assert!(note.sections.objective.is_empty());
        assert!(note.sections.assessment.is_empty());
    }

    #[test]
    fn finding_and_test_go_objective() {
        let entities = [
            entity(EntityKind::Finding, "Flexión de cadera limitada a 90°", Some("clinician")),
            entity(EntityKind::Test, "Test de FABER positivo", Some("clinician")),
        ];
        let note = build_note(&to_checklist(Some(&entities)), "es");
        assert_eq!(note.sections.objective.len(), 2);
        assert_eq!(note.locale, "es");
    }

    #[test]
    fn diagnosis_goes_assessment() {
        let entities = [entity(EntityKind::Diagnosis, "Coxartrosis incipiente", Some("clinician"))];
        let note = build_note(&to_checklist(Some(&entities)), "es");
        assert_eq!(note.sections.assessment, vec!["Coxartrosis incipiente"]);
    }

    #[test]
    fn note_partitions_every_signal_exactly_once() {
        let entities = [
            entity(EntityKind::Symptom, "dolor nocturno", Some("patient")),
            entity(EntityKind::Finding, "edema leve", Some("clinician")),
            entity(EntityKind::Test, "Lasègue negativo", Some("clinician")),
            entity(EntityKind::Diagnosis, "lumbalgia mecánica", Some("clinician")),
            entity(EntityKind::Intervention, "terapia manual lumbar", Some("clinician")),
            entity(EntityKind::Plan, "revisión en una semana", Some("clinician")),
        ];
        let signals = to_checklist(Some(&entities));
        let note = build_note(&signals, "es");
        assert_eq!(note.sections.total_items(), signals.len());
    }

    #[test]
    fn order_preserved_and_duplicates_kept() {
        let signals = to_checklist(Some(&[
            entity(EntityKind::Symptom, "dolor", Some("patient")),
            entity(EntityKind::Symptom, "rigidez", Some("patient")),
            entity(EntityKind::Symptom, "dolor", Some("patient")),
        ]));
        let note = build_note(&signals, "es");
        assert_eq!(note.sections.subjective, vec!["dolor", "rigidez", "dolor"]);
    }

    #[test]
    fn rebuilding_produces_equal_fresh_note() {
        let signals = to_checklist(Some(&[entity(
            EntityKind::Symptom,
            "dolor de hombro",
            Some("patient"),
        )]));
        assert_eq!(build_note(&signals, "es"), build_note(&signals, "es"));
    }

    // =================================================================
    // NOTE STATUS
    // =================================================================

    #[test]
    fn status_pending_without_data() {
        assert_eq!(note_status(None), NoteStatus::Pending);
    }

    #[test]
    fn status_empty_when_nothing_qualifies() {
        let entities = [entity(EntityKind::Medication, "naproxeno", None)];
        assert_eq!(note_status(Some(&entities)), NoteStatus::Empty);
        assert_eq!(note_status(Some(&[])), NoteStatus::Empty);
    }

    #[test]
    fn status_ready_with_one_qualifying_entity() {
        let entities = [entity(EntityKind::Symptom, "cervicalgia", Some("patient"))];
        assert_eq!(note_status(Some(&entities)), NoteStatus::Ready);
    }
}
