use super::*;

#[test]
fn test_parse_basic() {
    let roster = Roster::parse("name,math,coding\nAlice,5,2\nBob,1,4");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.skill_headers(), ["math", "coding"]);
    assert_eq!(roster.students()[0], Student::new("Alice", vec![5.0, 2.0]));
    assert_eq!(roster.students()[1], Student::new("Bob", vec![1.0, 4.0]));
}

#[test]
fn test_parse_header_only_is_empty() {
    let roster = Roster::parse("name,math,coding");
    assert!(roster.is_empty());
    assert!(roster.skill_headers().is_empty());
}

#[test]
fn test_parse_empty_text_is_empty() {
    assert!(Roster::parse("").is_empty());
    assert!(Roster::parse("   \n  ").is_empty());
}

#[test]
fn test_parse_non_numeric_coerced_to_zero() {
    let roster = Roster::parse("name,a,b,c\nAlice,3,x,5");
    assert_eq!(roster.students()[0].skills, vec![3.0, 0.0, 5.0]);
}

#[test]
fn test_parse_missing_name_defaults_to_unknown() {
    let roster = Roster::parse("name,a\n,4");
    assert_eq!(roster.students()[0].name, "Unknown");
    assert_eq!(roster.students()[0].skills, vec![4.0]);
}

#[test]
fn test_parse_trims_whitespace() {
    let roster = Roster::parse("name , math \n  Alice , 5 ");
    assert_eq!(roster.skill_headers(), ["math"]);
    assert_eq!(roster.students()[0].name, "Alice");
    assert_eq!(roster.students()[0].skills, vec![5.0]);
}

#[test]
fn test_parse_crlf_line_endings() {
    let roster = Roster::parse("name,math\r\nAlice,5\r\nBob,3\r\n");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.students()[1].skills, vec![3.0]);
}

#[test]
fn test_parse_negative_and_float_values() {
    let roster = Roster::parse("name,a,b\nAlice,-2.5,0.75");
    assert_eq!(roster.students()[0].skills, vec![-2.5, 0.75]);
}

#[test]
fn test_parse_ragged_rows_keep_own_width() {
    let roster = Roster::parse("name,a,b\nAlice,1\nBob,2,3");
    assert_eq!(roster.students()[0].skills, vec![1.0]);
    assert_eq!(roster.students()[1].skills, vec![2.0, 3.0]);
}

#[test]
fn test_parse_name_only_row_has_no_skills() {
    let roster = Roster::parse("name,a\nAlice");
    assert_eq!(roster.students()[0].name, "Alice");
    assert!(roster.students()[0].skills.is_empty());
}

#[test]
fn test_from_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "name,math\nAlice,5\nBob,3").unwrap();

    let roster = Roster::from_path(file.path()).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.students()[0].name, "Alice");
}

#[test]
fn test_from_path_missing_file_errors() {
    let result = Roster::from_path("/nonexistent/roster.csv");
    assert!(result.is_err());
}

#[test]
fn test_serde_round_trip() {
    let roster = Roster::parse("name,math\nAlice,5");
    let json = serde_json::to_string(&roster).unwrap();
    let back: Roster = serde_json::from_str(&json).unwrap();
    assert_eq!(back, roster);
}
