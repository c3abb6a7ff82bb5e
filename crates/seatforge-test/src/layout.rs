//! Classroom layouts.

/// Availability grid of a 5x8 room with two aisles and a short back row.
///
/// 27 available seats: six in each of the four front rows, with columns 2
/// and 5 left as aisles, and three in the back row (columns 0, 1 and 3).
pub fn aisled_room_5x8() -> Vec<Vec<bool>> {
    let full = vec![true, true, false, true, true, false, true, true];
    let back = vec![true, true, false, true, false, false, false, false];
    vec![full.clone(), full.clone(), full.clone(), full, back]
}

/// Availability grid with every seat open.
pub fn open_room(rows: usize, cols: usize) -> Vec<Vec<bool>> {
    vec![vec![true; cols]; rows]
}

/// Number of available seats in an availability grid.
pub fn count_available(grid: &[Vec<bool>]) -> usize {
    grid.iter().flatten().filter(|&&open| open).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aisled_room_shape() {
        let grid = aisled_room_5x8();
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 8));
        assert_eq!(count_available(&grid), 27);
        assert_eq!(count_available(&grid[4..]), 3);
    }

    #[test]
    fn test_open_room() {
        assert_eq!(count_available(&open_room(3, 4)), 12);
    }
}
