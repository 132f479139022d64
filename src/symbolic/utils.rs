// the collection of utility functions mainly for bracket parsing and proceeding

/// byte position of the first occurrence of the char at bracket depth zero
pub fn find_char_positions_outside_brackets(s: &str, c: char) -> Option<usize> {
    let mut depth = 0;
    for (i, ch) in s.char_indices() {
        if ch == '(' {
            depth += 1;
        } else if ch == ')' {
            depth -= 1;
        } else if ch == c && depth == 0 {
            return Some(i);
        }
    }
    None
}

/// byte position and identity of the last operator from the given set at
/// bracket depth zero; splitting on the rightmost operator keeps `+ - * /`
/// left associative in the recursive parser
pub fn find_rightmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
) -> Option<(usize, char)> {
    let mut bracket_depth = 0;
    let mut last_op_pos = None;
    let mut last_op_char = ' ';

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                last_op_pos = Some(i);
                last_op_char = c;
            }
            _ => {}
        }
    }

    last_op_pos.map(|pos| (pos, last_op_char))
}

/// byte index of the closing bracket pairing with the opening bracket at
/// byte index `bracket_start`
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Option<usize> {
    let mut stack = 0;
    for (i, c) in input.char_indices() {
        if i < bracket_start {
            continue;
        }
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            stack -= 1;
            if stack == 0 {
                return Some(i);
            }
        }
    }
    None
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);

    for i in 0..num_values {
        let value = start + (i as f64 * step);
        values.push(value);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_brackets_skips_bracketed_chars() {
        assert_eq!(find_char_positions_outside_brackets("(a+b)*c", '*'), Some(5));
        assert_eq!(find_char_positions_outside_brackets("(a*b)", '*'), None);
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        // 'π' occupies bytes 0..2, so the '*' sits at byte 2
        assert_eq!(find_char_positions_outside_brackets("π*2", '*'), Some(2));
        assert_eq!(
            find_rightmost_operator_outside_brackets("π*2*3", &['*', '/']),
            Some((4, '*'))
        );
        assert_eq!(find_pair_to_this_bracket("(π)", 0), Some(3));
    }

    #[test]
    fn test_rightmost_operator() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("a - b + c", &['+', '-']),
            Some((6, '+'))
        );
        assert_eq!(
            find_rightmost_operator_outside_brackets("(a - b)", &['+', '-']),
            None
        );
    }

    #[test]
    fn test_find_pair_to_this_bracket() {
        assert_eq!(find_pair_to_this_bracket("sin((x))", 3), Some(7));
        assert_eq!(find_pair_to_this_bracket("(x", 0), None);
    }

    #[test]
    fn test_linspace() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
