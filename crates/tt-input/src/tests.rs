//! Unit tests for tt-input.

use std::io::Cursor;

use tt_core::{ClassKey, RoomId, TeacherId};

use crate::{
    load_requirements_reader, read_rows, validate_row, InputError, Priority, RawRow,
    RequirementSet, SessionKind, ValidatedRow,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn raw(teacher: &str, periods: &str, kind: &str) -> RawRow {
    RawRow {
        department:       Some("CSE".into()),
        year:             Some("2".into()),
        section:          Some("A".into()),
        subject:          Some("Math".into()),
        teacher:          Some(teacher.into()),
        periods_per_week: Some(periods.into()),
        kind:             Some(kind.into()),
        room:             None,
    }
}

fn cse_a() -> ClassKey {
    ClassKey::new("CSE", "2", "A")
}

const SAMPLE_CSV: &str = "\
Department,Year,Section,Subject,Teacher,PeriodsPerWeek,Type,Room\n\
CSE,2,A,Math,Alice,5,theory,\n\
CSE,2,A,Physics,\"Bob, Carol\",2,LAB,PL1\n\
ECE,1,B,Circuits,Alice,4,Theory,Ignored\n\
\n\
CSE,2,A,English,Dave,3,theory,\n\
";

// ── Row validation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn accepts_well_formed_theory_row() {
        let row = validate_row(1, &raw(" Alice ", " 5 ", "Theory")).unwrap();
        assert_eq!(row.class, cse_a());
        assert_eq!(row.teachers, vec!["Alice".to_string()]);
        assert_eq!(row.periods, 5);
        assert_eq!(row.kind, SessionKind::Theory);
        assert_eq!(row.room, None);
    }

    #[test]
    fn splits_and_dedups_teachers() {
        let row = validate_row(1, &raw("Bob, Carol; Bob,", "2", "lab")).unwrap();
        assert_eq!(row.teachers, vec!["Bob".to_string(), "Carol".to_string()]);
        assert_eq!(row.kind, SessionKind::Lab);
    }

    #[test]
    fn rejects_blank_required_field() {
        let mut r = raw("Alice", "5", "theory");
        r.section = Some("   ".into());
        let err = validate_row(4, &r).unwrap_err();
        match err {
            InputError::Rejected { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("Section"), "got {reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_column() {
        let mut r = raw("Alice", "5", "theory");
        r.subject = None;
        assert!(matches!(validate_row(1, &r), Err(InputError::Rejected { .. })));
    }

    #[test]
    fn rejects_non_positive_periods() {
        assert!(validate_row(1, &raw("Alice", "0", "theory")).is_err());
        assert!(validate_row(1, &raw("Alice", "-3", "theory")).is_err());
        assert!(validate_row(1, &raw("Alice", "five", "theory")).is_err());
        // Whole integers only; no leading-digit truncation.
        assert!(validate_row(1, &raw("Alice", "5.0", "theory")).is_err());
        assert!(validate_row(1, &raw("Alice", "5abc", "theory")).is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        let err = validate_row(2, &raw("Alice", "5", "seminar")).unwrap_err();
        assert!(err.to_string().contains("seminar"), "got {err}");
    }

    #[test]
    fn rejects_teacher_list_of_only_separators() {
        assert!(validate_row(1, &raw(" , ;", "5", "theory")).is_err());
    }

    #[test]
    fn room_only_kept_for_labs() {
        let mut theory = raw("Alice", "5", "theory");
        theory.room = Some("R1".into());
        assert_eq!(validate_row(1, &theory).unwrap().room, None);

        let mut lab = raw("Alice", "2", "lab");
        lab.room = Some(" R1 ".into());
        assert_eq!(validate_row(1, &lab).unwrap().room.as_deref(), Some("R1"));

        let built = ValidatedRow::theory(cse_a(), "Math", "Alice", 5).with_room("R1");
        assert_eq!(built.room, None);
    }
}

// ── Grouping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grouping {
    use super::*;

    #[test]
    fn groups_by_class_in_first_appearance_order() {
        let ece = ClassKey::new("ECE", "1", "B");
        let set = RequirementSet::from_rows(vec![
            ValidatedRow::theory(cse_a(), "Math", "Alice", 5),
            ValidatedRow::theory(ece.clone(), "Circuits", "Alice", 4),
            ValidatedRow::theory(cse_a(), "English", "Dave", 3),
        ]);
        assert_eq!(set.class_count(), 2);
        assert_eq!(set.classes()[0].key, cse_a());
        assert_eq!(set.classes()[1].key, ece);
        assert_eq!(set.classes()[0].requirements.len(), 2);
        assert_eq!(set.requirement_count(), 3);
        assert_eq!(set.teacher_count(), 2);
        assert_eq!(set.class_id(&ece).map(|c| c.index()), Some(1));
    }

    #[test]
    fn shared_teacher_interned_once() {
        let set = RequirementSet::from_rows(vec![
            ValidatedRow::theory(cse_a(), "Math", "Alice", 5),
            ValidatedRow::theory(ClassKey::new("ME", "3", "C"), "Statics", "Alice", 2),
        ]);
        let a = &set.classes()[0].requirements[0];
        let b = &set.classes()[1].requirements[0];
        assert_eq!(a.teachers, vec![TeacherId(0)]);
        assert_eq!(a.teachers, b.teachers);
        assert_eq!(set.teachers().resolve(TeacherId(0)), Some("Alice"));
    }

    #[test]
    fn hand_built_row_with_repeated_teacher_collapses() {
        let set = RequirementSet::from_rows(vec![ValidatedRow::lab(
            cse_a(),
            "Physics",
            &["Bob", "Carol", "Bob"],
            2,
        )]);
        let req = &set.classes()[0].requirements[0];
        assert_eq!(req.teachers, vec![TeacherId(0), TeacherId(1)]);
        assert_eq!(req.label, "Physics LAB (Bob, Carol)");
        assert_eq!(set.teacher_count(), 2);
    }

    #[test]
    fn labels_and_priority() {
        let set = RequirementSet::from_rows(vec![
            ValidatedRow::theory(cse_a(), "Math", "Alice", 5),
            ValidatedRow::lab(cse_a(), "Physics", &["Bob", "Carol"], 2).with_room("PL1"),
        ]);
        let reqs = &set.classes()[0].requirements;
        assert_eq!(reqs[0].label, "Math (Alice)");
        assert_eq!(reqs[0].priority(), Priority::Theory);
        assert_eq!(reqs[0].width(), 1);
        assert_eq!(reqs[1].label, "Physics LAB (Bob, Carol)");
        assert_eq!(reqs[1].priority(), Priority::Lab);
        assert_eq!(reqs[1].priority().rank(), 1);
        assert_eq!(reqs[1].width(), 2);
        assert_eq!(reqs[1].room, Some(RoomId(0)));
    }

    #[test]
    fn placement_order_labs_first_then_largest() {
        let set = RequirementSet::from_rows(vec![
            ValidatedRow::theory(cse_a(), "English", "Dave", 3),
            ValidatedRow::theory(cse_a(), "Math", "Alice", 5),
            ValidatedRow::lab(cse_a(), "Chem", &["Eve"], 2),
            ValidatedRow::theory(cse_a(), "History", "Frank", 3),
            ValidatedRow::lab(cse_a(), "Physics", &["Bob"], 4),
        ]);
        let class = &set.classes()[0];
        let subjects: Vec<&str> = class
            .placement_order()
            .into_iter()
            .map(|i| class.requirements[i].subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["Physics", "Chem", "Math", "English", "History"]);
        assert_eq!(class.requested_periods(), 17);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_sample() {
        let set = load_requirements_reader(Cursor::new(SAMPLE_CSV)).unwrap();
        assert_eq!(set.class_count(), 2);
        assert_eq!(set.requirement_count(), 4);
        // Alice, Bob, Carol, Dave
        assert_eq!(set.teacher_count(), 4);
        // Room on the ECE theory row is dropped.
        assert_eq!(set.rooms().len(), 1);

        let physics = &set.classes()[0].requirements[1];
        assert!(physics.is_lab());
        assert_eq!(physics.teachers.len(), 2);
        assert_eq!(physics.room, Some(RoomId(0)));
    }

    #[test]
    fn room_column_is_optional() {
        let csv = "Department,Year,Section,Subject,Teacher,PeriodsPerWeek,Type\n\
                   CSE,2,A,Math,Alice,5,theory\n";
        let set = load_requirements_reader(Cursor::new(csv)).unwrap();
        assert_eq!(set.requirement_count(), 1);
        assert!(set.rooms().is_empty());
    }

    #[test]
    fn one_bad_row_halts_loading() {
        let csv = "Department,Year,Section,Subject,Teacher,PeriodsPerWeek,Type\n\
                   CSE,2,A,Math,Alice,5,theory\n\
                   CSE,2,A,Physics,,2,lab\n";
        let err = load_requirements_reader(Cursor::new(csv)).unwrap_err();
        assert!(
            matches!(err, InputError::Rejected { line: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn read_rows_tags_each_row() {
        let csv = "Department,Year,Section,Subject,Teacher,PeriodsPerWeek,Type\n\
                   CSE,2,A,Math,Alice,5,theory\n\
                   CSE,2,A,Physics,Bob,0,lab\n\
                   CSE,2,A,Chem,Eve,2,lab\n";
        let rows = read_rows(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        assert!(rows[1].is_err());
        assert!(rows[2].is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_requirements_csv(std::path::Path::new("/nonexistent/rows.csv"))
            .unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
