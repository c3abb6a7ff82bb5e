//! Index-compiled view of a problem.
//!
//! Names are resolved to roster indices once, so the search works on
//! integers and never touches strings on its hot path.

use std::collections::HashMap;

use smallvec::SmallVec;

use seatforge_core::{Constraint, Gender, InputError, Position, Problem, SeatLayout};

/// A constraint with student names resolved to roster indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Rule {
    Absolute { student: usize, seat: Position },
    Together(usize, usize),
    NotTogether(usize, usize),
    MustBeInRow { student: usize, row: usize },
    FarApart(usize, usize, f64),
}

impl Rule {
    fn members(&self) -> (usize, Option<usize>) {
        match *self {
            Rule::Absolute { student, .. } | Rule::MustBeInRow { student, .. } => (student, None),
            Rule::Together(a, b) | Rule::NotTogether(a, b) | Rule::FarApart(a, b, _) => {
                (a, Some(b))
            }
        }
    }

    /// The other member of a two-student rule, seen from `student`.
    pub(crate) fn partner_of(&self, student: usize) -> Option<usize> {
        match self.members() {
            (a, Some(b)) if a == student => Some(b),
            (a, Some(b)) if b == student => Some(a),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchModel<'p> {
    layout: &'p SeatLayout,
    names: Vec<&'p str>,
    genders: Vec<Option<Gender>>,
    rules: Vec<Rule>,
    rules_by_student: Vec<SmallVec<[usize; 4]>>,
    /// First Absolute target of each student.
    targets: Vec<Option<Position>>,
    /// Student owning an Absolute target, per cell.
    reserved: Vec<Option<usize>>,
}

impl<'p> SearchModel<'p> {
    /// Resolves every constraint against the roster.
    ///
    /// Names missing from the roster cannot be indexed and are rejected
    /// even when full validation is switched off.
    pub(crate) fn compile(problem: &'p Problem) -> Result<Self, InputError> {
        let layout = &problem.layout;
        let names: Vec<&str> = problem.students.iter().map(|s| s.name()).collect();
        let genders = problem.students.iter().map(|s| s.gender()).collect();

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(names.len());
        for (i, &name) in names.iter().enumerate() {
            index.entry(name).or_insert(i);
        }
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| InputError::UnknownStudent(name.to_string()))
        };

        let mut rules = Vec::with_capacity(problem.constraints.len());
        for constraint in &problem.constraints {
            let rule = match constraint {
                Constraint::Absolute { student, row, col } => Rule::Absolute {
                    student: lookup(student)?,
                    seat: Position::new(*row, *col),
                },
                Constraint::Together { first, second } => {
                    Rule::Together(lookup(first)?, lookup(second)?)
                }
                Constraint::NotTogether { first, second } => {
                    Rule::NotTogether(lookup(first)?, lookup(second)?)
                }
                Constraint::MustBeInRow { student, row } => Rule::MustBeInRow {
                    student: lookup(student)?,
                    row: *row,
                },
                Constraint::FarApart {
                    first,
                    second,
                    min_distance,
                } => Rule::FarApart(lookup(first)?, lookup(second)?, *min_distance),
            };
            rules.push(rule);
        }

        let mut rules_by_student = vec![SmallVec::new(); names.len()];
        let mut targets = vec![None; names.len()];
        let mut reserved = vec![None; layout.seat_count()];
        for (r, rule) in rules.iter().enumerate() {
            let (a, b) = rule.members();
            rules_by_student[a].push(r);
            if let Some(b) = b.filter(|&b| b != a) {
                rules_by_student[b].push(r);
            }
            if let Rule::Absolute { student, seat } = *rule {
                targets[student].get_or_insert(seat);
                if layout.contains(seat) {
                    reserved[layout.index(seat)].get_or_insert(student);
                }
            }
        }

        Ok(Self {
            layout,
            names,
            genders,
            rules,
            rules_by_student,
            targets,
            reserved,
        })
    }

    pub(crate) fn layout(&self) -> &SeatLayout {
        self.layout
    }

    pub(crate) fn student_count(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn name(&self, student: usize) -> &'p str {
        self.names[student]
    }

    pub(crate) fn gender(&self, student: usize) -> Option<Gender> {
        self.genders[student]
    }

    pub(crate) fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub(crate) fn rule(&self, index: usize) -> &Rule {
        &self.rules[index]
    }

    /// Indices of the rules that mention a student.
    pub(crate) fn rules_of(&self, student: usize) -> &[usize] {
        &self.rules_by_student[student]
    }

    pub(crate) fn target(&self, student: usize) -> Option<Position> {
        self.targets[student]
    }

    /// The student another student's Absolute rule reserves this seat for.
    pub(crate) fn reserved_by(&self, pos: Position) -> Option<usize> {
        if self.layout.contains(pos) {
            self.reserved[self.layout.index(pos)]
        } else {
            None
        }
    }
}
