use crate::cursor::Cursor;

/// Ada comments run from `--` to the end of the line.
pub(super) fn at_comment_start(cursor: &Cursor<'_>) -> bool {
    cursor.current_char() == '-' && cursor.peek_char(1) == '-'
}

pub(super) fn skip_comment(cursor: &mut Cursor<'_>) {
    cursor.advance(); // first '-'
    cursor.advance(); // second '-'
    while !cursor.is_at_end() && cursor.current_char() != '\n' {
        cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_runs_to_end_of_line() {
        let mut cursor = Cursor::new("-- a comment\nnext");
        assert!(at_comment_start(&cursor));
        skip_comment(&mut cursor);
        assert_eq!(cursor.current_char(), '\n');
    }
}
