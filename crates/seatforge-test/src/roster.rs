//! Student rosters.

use seatforge_core::Student;

/// `n` students named "Student 1" through "Student n", without gender.
pub fn roster(n: usize) -> Vec<Student> {
    (1..=n).map(|i| Student::new(format!("Student {i}"))).collect()
}

/// One student per letter, named by the letter itself.
///
/// ```
/// let students = seatforge_test::letters("ABC");
/// assert_eq!(students[2].name(), "C");
/// ```
pub fn letters(alphabet: &str) -> Vec<Student> {
    alphabet.chars().map(|c| Student::new(c.to_string())).collect()
}

/// `males` boys named "Boy 1".. followed by `females` girls named "Girl 1"..
pub fn mixed_roster(males: usize, females: usize) -> Vec<Student> {
    let boys = (1..=males).map(|i| Student::male(format!("Boy {i}")));
    let girls = (1..=females).map(|i| Student::female(format!("Girl {i}")));
    boys.chain(girls).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_core::Gender;

    #[test]
    fn test_roster_names() {
        let students = roster(3);
        assert_eq!(students.len(), 3);
        assert_eq!(students[0].name(), "Student 1");
        assert_eq!(students[2].gender(), None);
    }

    #[test]
    fn test_mixed_roster() {
        let students = mixed_roster(2, 1);
        assert_eq!(students[1].gender(), Some(Gender::Male));
        assert_eq!(students[2].name(), "Girl 1");
        assert_eq!(students[2].gender(), Some(Gender::Female));
    }
}
