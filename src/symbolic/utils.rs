// the collection of utility functions for bracket checking and blank-line detection

/// true when every bracket is closed by a bracket of the same kind, in order
pub fn brackets_balanced(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' | '{' | '[' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// empty or whitespace only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
