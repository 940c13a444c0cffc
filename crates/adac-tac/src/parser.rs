use adac_defs::TacOp;

use crate::instruction::{Instruction, InstructionKind};
use crate::place::Place;

/// Parses a place operand's text form back into a [`Place`].
///
/// Numeric tokens become literals; `_t<n>`/`_BP±k` become their typed
/// variants; everything else is a plain name. A leading `@` wraps
/// whatever follows in [`Place::AddressOf`].
fn parse_place(token: &str) -> Place {
    if let Some(rest) = token.strip_prefix('@') {
        return parse_place(rest).address_of();
    }
    if let Some(rest) = token.strip_prefix("_t") {
        if let Ok(n) = rest.parse::<u32>() {
            return Place::Temp(n);
        }
    }
    if let Some(rest) = token.strip_prefix("_BP+") {
        if let Ok(k) = rest.parse::<i32>() {
            return Place::Frame(k);
        }
    }
    if let Some(rest) = token.strip_prefix("_BP-") {
        if let Ok(k) = rest.parse::<i32>() {
            return Place::Frame(-k);
        }
    }
    if let Ok(i) = token.parse::<i64>() {
        return Place::Int(i);
    }
    if token.contains('.') {
        if let Ok(r) = token.parse::<f64>() {
            return Place::Real(r);
        }
    }
    Place::Named(token.to_string())
}

fn is_identifier_like(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphanumeric() || c == '_')
}

fn parse_ascii_directive(rest: &str) -> Option<String> {
    let rest = rest.strip_prefix(".ASCIZ")?.trim();
    let bytes = rest.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0] as char, bytes[bytes.len() - 1] as char);
        if (first == '"' && last == '"') || (first == '\'' && last == '\'') {
            return Some(rest[1..rest.len() - 1].to_string());
        }
    }
    None
}

/// Reads a TAC file's text back into a structured instruction list.
///
/// Never fails: a line that doesn't match any recognized form becomes
/// [`InstructionKind::Unknown`] and parsing continues, matching the
/// generator's text format being a stable contract that a hand-edited
/// or future-extended TAC file shouldn't trip a hard error in.
pub struct TacParser;

impl TacParser {
    pub fn parse(text: &str) -> Vec<Instruction> {
        text.lines().filter_map(Self::parse_line).collect()
    }

    fn parse_line(raw: &str) -> Option<Instruction> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(Instruction::new(Self::classify(line)))
    }

    fn classify(line: &str) -> InstructionKind {
        if let Some(colon) = line.find(':') {
            let label = line[..colon].trim();
            let rest = line[colon + 1..].trim();
            if is_identifier_like(label) {
                if rest.is_empty() {
                    return InstructionKind::Label {
                        name: label.to_string(),
                    };
                }
                if let Some(value) = parse_ascii_directive(rest) {
                    return InstructionKind::StringDef {
                        label: label.to_string(),
                        value,
                    };
                }
            }
        }

        let mut words = line.split_whitespace();
        let first = words.next().unwrap_or("");

        match first {
            "proc" => {
                return InstructionKind::ProcStart {
                    name: words.next().unwrap_or("").to_string(),
                }
            }
            "endp" => {
                return InstructionKind::ProcEnd {
                    name: words.next().unwrap_or("").to_string(),
                }
            }
            "start" => {
                return InstructionKind::ProgramStart {
                    name: words.next().unwrap_or("").to_string(),
                }
            }
            "START" if words.next() == Some("PROC") => {
                return InstructionKind::ProgramStart {
                    name: words.next().unwrap_or("").to_string(),
                }
            }
            "rdi" => {
                return InstructionKind::Read {
                    dest: parse_place(words.next().unwrap_or("")),
                }
            }
            "wri" => {
                return InstructionKind::Write {
                    operand: parse_place(words.next().unwrap_or("")),
                }
            }
            "wrs" => {
                return InstructionKind::WriteString {
                    label: words.next().unwrap_or("").to_string(),
                }
            }
            "wrln" => return InstructionKind::NewLine,
            "push" => {
                return InstructionKind::Push {
                    operand: parse_place(words.next().unwrap_or("")),
                }
            }
            "call" => {
                let rest = line[first.len()..].trim();
                let mut parts = rest.splitn(2, ',');
                let name = parts.next().unwrap_or("").trim().to_string();
                let arg_count = parts.next().and_then(|s| s.trim().parse::<u32>().ok());
                return InstructionKind::Call { name, arg_count };
            }
            "goto" => {
                return InstructionKind::Goto {
                    label: words.next().unwrap_or("").to_string(),
                }
            }
            "return" => {
                let rest = line[first.len()..].trim();
                let value = if rest.is_empty() {
                    None
                } else {
                    Some(parse_place(rest))
                };
                return InstructionKind::Return { value };
            }
            _ if first.starts_with("if_") => {
                let cond = first.trim_start_matches("if_").to_string();
                let rest = line[first.len()..].trim();
                let parts: Vec<&str> = rest.splitn(3, ',').map(str::trim).collect();
                if parts.len() == 3 {
                    return InstructionKind::If {
                        cond,
                        left: parse_place(parts[0]),
                        right: parse_place(parts[1]),
                        label: parts[2].to_string(),
                    };
                }
            }
            _ => {}
        }

        if let Some(eq) = line.find('=') {
            let dest = parse_place(line[..eq].trim());
            let rhs = line[eq + 1..].trim();

            if rhs == "retrieve" {
                return InstructionKind::Retrieve { dest };
            }

            let rhs_words: Vec<&str> = rhs.split_whitespace().collect();
            match rhs_words.as_slice() {
                [unop, operand] if TacOp::from_mnemonic(unop).is_some() => {
                    return InstructionKind::Unary {
                        dest,
                        op: TacOp::from_mnemonic(unop).unwrap(),
                        operand: parse_place(operand),
                    };
                }
                [left, op, right] if TacOp::from_mnemonic(op).is_some() => {
                    return InstructionKind::Binary {
                        dest,
                        op: TacOp::from_mnemonic(op).unwrap(),
                        left: parse_place(left),
                        right: parse_place(right),
                    };
                }
                [src] => {
                    return InstructionKind::Assign {
                        dest,
                        src: parse_place(src),
                    };
                }
                _ => {}
            }
        }

        InstructionKind::Unknown(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_def_and_label() {
        let instrs = TacParser::parse("_S0: .ASCIZ \"hi$\"\nL1:\n");
        assert_eq!(
            instrs[0].kind,
            InstructionKind::StringDef {
                label: "_S0".to_string(),
                value: "hi$".to_string()
            }
        );
        assert_eq!(
            instrs[1].kind,
            InstructionKind::Label {
                name: "L1".to_string()
            }
        );
    }

    #[test]
    fn parses_proc_bounds_and_program_start() {
        let instrs = TacParser::parse("proc one\nendp one\nstart one\n");
        assert_eq!(
            instrs[0].kind,
            InstructionKind::ProcStart { name: "one".into() }
        );
        assert_eq!(instrs[1].kind, InstructionKind::ProcEnd { name: "one".into() });
        assert_eq!(
            instrs[2].kind,
            InstructionKind::ProgramStart { name: "one".into() }
        );
    }

    #[test]
    fn parses_binary_unary_and_plain_assignment() {
        let instrs = TacParser::parse("_t0 = a ADD 2\n_t1 = UMINUS a\nb = _t0\n");
        assert_eq!(
            instrs[0].kind,
            InstructionKind::Binary {
                dest: Place::Temp(0),
                op: TacOp::Add,
                left: Place::Named("a".into()),
                right: Place::Int(2),
            }
        );
        assert_eq!(
            instrs[1].kind,
            InstructionKind::Unary {
                dest: Place::Temp(1),
                op: TacOp::UMinus,
                operand: Place::Named("a".into()),
            }
        );
        assert_eq!(
            instrs[2].kind,
            InstructionKind::Assign {
                dest: Place::Named("b".into()),
                src: Place::Temp(0),
            }
        );
    }

    #[test]
    fn parses_push_call_with_address_of_and_count() {
        let instrs = TacParser::parse("push @_BP-2\npush _BP+4\ncall p, 3\n");
        assert_eq!(
            instrs[0].kind,
            InstructionKind::Push {
                operand: Place::Frame(-2).address_of()
            }
        );
        assert_eq!(
            instrs[1].kind,
            InstructionKind::Push {
                operand: Place::Frame(4)
            }
        );
        assert_eq!(
            instrs[2].kind,
            InstructionKind::Call {
                name: "p".to_string(),
                arg_count: Some(3)
            }
        );
    }

    #[test]
    fn io_opcodes_parse() {
        let instrs = TacParser::parse("rdi _BP-2\nwri _BP-2\nwrs _S0\nwrln\n");
        assert_eq!(
            instrs[0].kind,
            InstructionKind::Read { dest: Place::Frame(-2) }
        );
        assert_eq!(
            instrs[1].kind,
            InstructionKind::Write { operand: Place::Frame(-2) }
        );
        assert_eq!(
            instrs[2].kind,
            InstructionKind::WriteString { label: "_S0".to_string() }
        );
        assert_eq!(instrs[3].kind, InstructionKind::NewLine);
    }

    #[test]
    fn unknown_lines_are_recorded_not_rejected() {
        let instrs = TacParser::parse("this is not a tac line");
        assert_eq!(
            instrs[0].kind,
            InstructionKind::Unknown("this is not a tac line".to_string())
        );
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let instrs = TacParser::parse("\n# a comment\n\nwrln\n");
        assert_eq!(instrs.len(), 1);
        assert_eq!(instrs[0].kind, InstructionKind::NewLine);
    }

    #[test]
    fn control_flow_and_retrieve_and_return_parse() {
        let instrs = TacParser::parse("goto L1\nif_EQ a, b, L1\nx = retrieve\nreturn x\nreturn\n");
        assert_eq!(instrs[0].kind, InstructionKind::Goto { label: "L1".into() });
        assert_eq!(
            instrs[1].kind,
            InstructionKind::If {
                cond: "EQ".to_string(),
                left: Place::Named("a".into()),
                right: Place::Named("b".into()),
                label: "L1".to_string(),
            }
        );
        assert_eq!(
            instrs[2].kind,
            InstructionKind::Retrieve {
                dest: Place::Named("x".into())
            }
        );
        assert_eq!(
            instrs[3].kind,
            InstructionKind::Return {
                value: Some(Place::Named("x".into()))
            }
        );
        assert_eq!(instrs[4].kind, InstructionKind::Return { value: None });
    }
}
