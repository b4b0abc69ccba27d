//! Mark/roster merging: left join by normalized name, classroom sort.
//!
//! Every mark row produces exactly one merged row; roster rows that match
//! nothing are dropped. Serial numbers are assigned in mark upload order
//! before sorting and are never recomputed, so they identify the upload
//! position rather than the report position.

use report_cleaning::normalize_arabic;
use report_common::{MarkRecord, MergedRow, StudentRecord, UNKNOWN_LABEL};
use tracing::debug;

/// Join marks to classrooms and sort the result by classroom.
#[must_use]
pub fn merge_records(marks: &[MarkRecord], students: &[StudentRecord]) -> Vec<MergedRow> {
    let roster: Vec<(String, &StudentRecord)> = students
        .iter()
        .map(|s| (normalize_arabic(&s.corrected_name), s))
        .collect();

    let mut rows: Vec<MergedRow> = marks
        .iter()
        .enumerate()
        .map(|(index, mark)| {
            let key = normalize_arabic(&mark.name);
            // First roster match wins when several names normalize equal.
            let classroom = roster
                .iter()
                .find(|(roster_key, _)| *roster_key == key)
                .map_or_else(
                    || UNKNOWN_LABEL.to_string(),
                    |(_, student)| student.classroom.clone(),
                );
            MergedRow {
                serial: index as u32 + 1,
                course: mark.course.clone(),
                name: mark.name.clone(),
                total: mark.total,
                classroom,
            }
        })
        .collect();

    let unmatched = rows
        .iter()
        .filter(|r| r.classroom == UNKNOWN_LABEL)
        .count();
    debug!(rows = rows.len(), unmatched, "merged mark and roster records");

    // Stable sort: mark upload order is preserved within a classroom.
    rows.sort_by_cached_key(|row| collation_key(&row.classroom));
    rows
}

/// Ordering key approximating Arabic collation for classroom labels.
///
/// The Arabic Unicode block is laid out alphabetically, so folding spelling
/// variants and comparing code points matches locale collation for the short
/// section labels this report deals with.
#[must_use]
pub fn collation_key(label: &str) -> String {
    normalize_arabic(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(name: &str, course: &str, total: f64) -> MarkRecord {
        MarkRecord {
            course: course.to_string(),
            name: name.to_string(),
            total,
        }
    }

    fn student(corrected: &str, classroom: &str) -> StudentRecord {
        StudentRecord {
            corrected_name: corrected.to_string(),
            classroom: classroom.to_string(),
        }
    }

    #[test]
    fn matches_across_spelling_variants() {
        let marks = vec![mark("احمد علي", "رياضيات", 85.0)];
        let students = vec![student("أحمد على", "3A")];
        let merged = merge_records(&marks, &students);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].classroom, "3A");
    }

    #[test]
    fn serials_reflect_upload_order_not_sort_order() {
        let marks = vec![
            mark("طالب واحد", "علوم", 70.0),
            mark("طالب اثنان", "علوم", 80.0),
        ];
        // First mark lands in the classroom that sorts last.
        let students = vec![
            student("طالب واحد", "ب"),
            student("طالب اثنان", "ا"),
        ];
        let merged = merge_records(&marks, &students);
        assert_eq!(merged[0].classroom, "ا");
        assert_eq!(merged[0].serial, 2);
        assert_eq!(merged[1].classroom, "ب");
        assert_eq!(merged[1].serial, 1);
    }

    #[test]
    fn left_join_keeps_unmatched_marks_and_drops_unmatched_students() {
        let marks = vec![mark("مجهول تماما", "رياضيات", 50.0)];
        let students = vec![
            student("اسم اخر", "1B"),
            student("اسم ثالث", "2C"),
        ];
        let merged = merge_records(&marks, &students);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].classroom, UNKNOWN_LABEL);
    }

    #[test]
    fn first_roster_match_wins_on_duplicate_keys() {
        let marks = vec![mark("احمد", "رياضيات", 60.0)];
        let students = vec![student("أحمد", "3A"), student("احمد", "4B")];
        let merged = merge_records(&marks, &students);
        assert_eq!(merged[0].classroom, "3A");
    }

    #[test]
    fn sorted_by_classroom_and_stable_within_ties() {
        let marks = vec![
            mark("ا", "م", 1.0),
            mark("ب", "م", 2.0),
            mark("ج", "م", 3.0),
            mark("د", "م", 4.0),
        ];
        let students = vec![
            student("ا", "ب"),
            student("ب", "ا"),
            student("ج", "ب"),
            student("د", "ا"),
        ];
        let merged = merge_records(&marks, &students);
        let classrooms: Vec<&str> = merged.iter().map(|r| r.classroom.as_str()).collect();
        assert_eq!(classrooms, ["ا", "ا", "ب", "ب"]);
        // Ties keep mark upload order.
        assert_eq!(merged[0].serial, 2);
        assert_eq!(merged[1].serial, 4);
        assert_eq!(merged[2].serial, 1);
        assert_eq!(merged[3].serial, 3);
    }

    #[test]
    fn classroom_variants_sort_together() {
        // "أ" and "ا" fold to the same collation key.
        assert_eq!(collation_key("أ1"), collation_key("ا1"));
    }
}
