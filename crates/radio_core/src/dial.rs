use crate::Direction;

/// Move a 1-based station index one step, wrapping within `[1, count]`.
///
/// `count` must be non-zero.
pub(crate) fn tune(current: usize, direction: Direction, count: usize) -> usize {
    let next = current as isize + direction.step();
    if next > count as isize {
        1
    } else if next < 1 {
        count
    } else {
        next as usize
    }
}

#[cfg(test)]
mod test_tune {
    use super::*;

    #[test]
    /// Two stations, stepping left from the first lands on the last
    fn test_wrap_below_first() {
        assert_eq!(tune(1, Direction::Left, 2), 2);
    }

    #[test]
    /// Two stations, stepping right from the last lands on the first
    fn test_wrap_above_last() {
        assert_eq!(tune(2, Direction::Right, 2), 1);
    }

    #[test]
    fn test_step_inside_range() {
        assert_eq!(tune(2, Direction::Right, 4), 3);
        assert_eq!(tune(3, Direction::Left, 4), 2);
    }

    #[test]
    /// A single station always stays selected
    fn test_single_station() {
        assert_eq!(tune(1, Direction::Left, 1), 1);
        assert_eq!(tune(1, Direction::Right, 1), 1);
    }

    #[test]
    fn test_any_walk_stays_in_range() {
        for count in 1..=5 {
            let mut current = 1;
            for step in 0..37 {
                let direction = if step % 3 == 0 {
                    Direction::Left
                } else {
                    Direction::Right
                };
                current = tune(current, direction, count);
                assert!((1..=count).contains(&current));
            }
        }
    }
}
