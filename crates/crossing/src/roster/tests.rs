use super::*;
use std::io::Write;

#[test]
fn default_roster_is_the_canonical_four() {
    let roster = default_roster();
    let times: Vec<f64> = roster.participants.iter().map(Participant::time).collect();
    assert_eq!(times, vec![1.0, 2.0, 5.0, 10.0]);
    assert_eq!(roster.participants[3].id(), ParticipantId(3));
    assert_eq!(roster.notice, None);
}

#[test]
fn parses_people_in_document_order() {
    let text = "people:\n  - name: Zed\n    time: 4\n  - name: Amy\n    time: 1.5\n";
    let roster = parse_roster(text).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.participants[0].name(), "Zed");
    assert_eq!(roster.participants[0].id(), ParticipantId(0));
    assert_eq!(roster.participants[1].time(), 1.5);
    assert_eq!(roster.participants[1].id(), ParticipantId(1));
}

#[test]
fn repeated_names_get_distinct_ids() {
    let text = "people:\n  - {name: Sam, time: 2}\n  - {name: Sam, time: 2}\n";
    let state = parse_roster(text).unwrap().into_state().unwrap();
    assert_eq!(state.origin().len(), 2);
}

#[test]
fn empty_document_degrades_to_empty_roster() {
    for text in ["", "   \n", "~\n"] {
        let roster = parse_roster(text).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.notice, Some(RosterNotice::EmptyDocument));
    }
}

#[test]
fn missing_people_degrades_to_empty_roster() {
    for text in ["other: 3\n", "people:\n", "people: ~\n"] {
        let roster = parse_roster(text).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.notice, Some(RosterNotice::MissingPeople));
    }
}

#[test]
fn explicit_empty_list_is_not_a_notice() {
    let roster = parse_roster("people: []\n").unwrap();
    assert!(roster.is_empty());
    assert_eq!(roster.notice, None);
}

#[test]
fn unparsable_yaml_is_an_error() {
    let err = parse_roster("people: [unclosed\n").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn entry_without_time_is_an_error() {
    let err = parse_roster("people:\n  - name: A\n").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn non_positive_time_is_rejected() {
    let err = parse_roster("people:\n  - {name: A, time: 1}\n  - {name: B, time: 0}\n")
        .unwrap_err();
    match err {
        LoadError::InvalidEntry { index, name, time } => {
            assert_eq!(index, 1);
            assert_eq!(name, "B");
            assert_eq!(time, 0.0);
        }
        other => panic!("expected InvalidEntry, got {other:?}"),
    }
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "people:\n  - name: A\n    time: 3").unwrap();
    let roster = load_roster(file.path()).unwrap();
    assert_eq!(roster.len(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_roster(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
