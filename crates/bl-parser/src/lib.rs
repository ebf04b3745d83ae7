// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parser for the BL block language.
//!
//! Transforms a token stream into a statement tree.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::Parser;

#[cfg(test)]
mod tests {
    use super::*;
    use bl_ast::{Condition, Kind, Statement};

    fn parse(src: &str) -> Result<Statement, ParseError> {
        Parser::new(bl_lexer::tokens(src)).parse()
    }

    #[test]
    fn parse_if_with_call_body() {
        let mut block = parse("IF next-is-empty THEN move END IF").unwrap();
        assert_eq!(block.length_of_block(), 1);

        let mut stmt = block.remove_from_block(0);
        assert_eq!(stmt.kind(), Kind::If);

        let (cond, mut body) = stmt.disassemble_if();
        assert_eq!(cond, Condition::NextIsEmpty);
        assert_eq!(body.length_of_block(), 1);

        let mut child = body.remove_from_block(0);
        assert_eq!(child.kind(), Kind::Call);
        assert_eq!(child.disassemble_call(), "move");
    }

    #[test]
    fn parse_while_with_empty_body() {
        let mut block = parse("WHILE next-is-not-wall DO END WHILE").unwrap();
        assert_eq!(block.length_of_block(), 1);

        let mut stmt = block.remove_from_block(0);
        assert_eq!(stmt.kind(), Kind::While);

        let (cond, body) = stmt.disassemble_while();
        assert_eq!(cond, Condition::NextIsNotWall);
        assert_eq!(body.length_of_block(), 0);
    }

    #[test]
    fn parse_if_else() {
        let mut block = parse("IF random THEN turnleft ELSE turnright END IF").unwrap();
        assert_eq!(block.length_of_block(), 1);

        let mut stmt = block.remove_from_block(0);
        assert_eq!(stmt.kind(), Kind::IfElse);

        let (cond, mut then_body, mut else_body) = stmt.disassemble_if_else();
        assert_eq!(cond, Condition::Random);
        assert_eq!(then_body.length_of_block(), 1);
        assert_eq!(else_body.length_of_block(), 1);
        assert_eq!(then_body.remove_from_block(0).disassemble_call(), "turnleft");
        assert_eq!(else_body.remove_from_block(0).disassemble_call(), "turnright");
    }

    #[test]
    fn parse_empty_source() {
        let block = parse("").unwrap();
        assert!(block.is_empty_block());
    }

    #[test]
    fn parsing_is_deterministic() {
        let src = "move WHILE true DO IF random THEN infect END IF END WHILE";
        assert_eq!(parse(src).unwrap(), parse(src).unwrap());
    }

    #[test]
    fn missing_terminator_is_an_error() {
        let err = parse("IF next-is-empty THEN").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEnd { expected: "'END'".to_string() });
    }

    #[test]
    fn unterminated_while_is_an_error() {
        let err = parse("WHILE true DO move").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEnd { expected: "'END'".to_string() });
    }

    #[test]
    fn stray_block_terminator_is_an_error() {
        let err = parse("move END IF").unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "end of input".to_string(),
                found: "END".to_string(),
            }
        );
    }

    #[test]
    fn missing_then_is_an_error() {
        let err = parse("IF true move END IF").unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected { expected: "'THEN'".to_string(), found: "move".to_string() }
        );
    }

    #[test]
    fn mismatched_end_keyword_is_an_error() {
        let err = parse("WHILE true DO END IF").unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected { expected: "'WHILE'".to_string(), found: "IF".to_string() }
        );
    }

    #[test]
    fn unknown_condition_is_an_error() {
        let err = parse("IF next-is-lava THEN move END IF").unwrap_err();
        assert_eq!(err, ParseError::UnknownCondition("next-is-lava".to_string()));
    }

    #[test]
    fn condition_cut_off_by_end_of_input() {
        let err = parse("IF").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEnd { expected: "a condition".to_string() });
    }

    #[test]
    fn reserved_word_is_not_a_call() {
        let err = parse("WHILE true DO DO END WHILE").unwrap_err();
        assert_eq!(err, ParseError::InvalidCallName("DO".to_string()));
    }

    #[test]
    fn malformed_call_name_is_an_error() {
        let err = parse("3move").unwrap_err();
        assert_eq!(err, ParseError::InvalidCallName("3move".to_string()));
    }

    #[test]
    fn parse_statement_consumes_one_statement() {
        let mut parser = Parser::new(bl_lexer::tokens("move turnleft"));
        let stmt = parser.parse_statement().unwrap();
        assert_eq!(stmt.kind(), Kind::Call);

        let rest = parser.parse_block().unwrap();
        assert_eq!(rest.length_of_block(), 1);
    }

    #[test]
    fn parse_block_stops_before_else() {
        let mut parser = Parser::new(bl_lexer::tokens("move ELSE turnleft"));
        let block = parser.parse_block().unwrap();
        assert_eq!(block.length_of_block(), 1);
    }

    #[test]
    fn deeply_nested_statements_parse() {
        let depth = 64;
        let mut src = String::new();
        for _ in 0..depth {
            src.push_str("WHILE true DO ");
        }
        src.push_str("move ");
        for _ in 0..depth {
            src.push_str("END WHILE ");
        }

        let mut block = parse(&src).unwrap();
        let mut stmt = block.remove_from_block(0);
        for _ in 0..depth {
            assert_eq!(stmt.kind(), Kind::While);
            let (_, mut body) = stmt.disassemble_while();
            stmt = body.remove_from_block(0);
        }
        assert_eq!(stmt.disassemble_call(), "move");
    }
}
