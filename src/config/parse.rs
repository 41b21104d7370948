use nom::branch::alt;
use nom::bytes::complete::take_till1;
use nom::character::complete::{one_of, space0};
use nom::combinator::{eof, map, rest, value};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::IResult;

use crate::error::{Error, Result};

/// One line of a `key=value` properties file.
#[derive(Debug, PartialEq, Clone)]
pub enum Line<'a> {
    Blank,
    Comment,
    Property(&'a str, &'a str),
}

fn blank(input: &str) -> IResult<&str, Line> {
    value(Line::Blank, eof)(input)
}

fn comment(input: &str) -> IResult<&str, Line> {
    value(Line::Comment, preceded(one_of("#!"), rest))(input)
}

fn key(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == '=' || c == ':' || c.is_whitespace())(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    delimited(space0, one_of("=:"), space0)(input)
}

fn property(input: &str) -> IResult<&str, Line> {
    map(separated_pair(key, separator, rest),
        |(k, v): (&str, &str)| Line::Property(k, v.trim_end()))(input)
}

pub fn line(input: &str) -> IResult<&str, Line> {
    preceded(space0, alt((
        blank,
        comment,
        property,
    )))(input)
}

/// All `(key, value)` pairs of a properties file, in file order.
pub fn properties(input: &str) -> Result<Vec<(&str, &str)>> {
    let mut pairs = vec![];
    for (n, text) in input.lines().enumerate() {
        match line(text) {
            Ok((_, Line::Property(k, v))) => pairs.push((k, v)),
            Ok(_) => {}
            Err(_) => return Err(Error::config(format!("line {}: expected key=value, got {:?}", n + 1, text))),
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use crate::config::parse::{line, properties, Line};

    #[test]
    fn parse_property() {
        assert_eq!(line("storage=tree").unwrap().1, Line::Property("storage", "tree"));
        assert_eq!(line("  storage : trie  ").unwrap().1, Line::Property("storage", "trie"));
        assert_eq!(line("dict.url=https://example.com/english.0").unwrap().1,
                   Line::Property("dict.url", "https://example.com/english.0"));
        assert_eq!(line("empty=").unwrap().1, Line::Property("empty", ""));
    }

    #[test]
    fn parse_comments_and_blanks() {
        assert_eq!(line("# a comment").unwrap().1, Line::Comment);
        assert_eq!(line("  ! also a comment").unwrap().1, Line::Comment);
        assert_eq!(line("").unwrap().1, Line::Blank);
        assert_eq!(line("   ").unwrap().1, Line::Blank);
    }

    #[test]
    fn reject_line_without_separator() {
        assert!(line("storage tree").is_err());
        assert!(properties("storage=tree\njust words\n").is_err());
    }

    #[test]
    fn collect_pairs_in_order() {
        let input = "# spell checker\nstorage=tree\n\ndict.url = http://localhost/english.0\n";
        assert_eq!(properties(input).unwrap(), vec![
            ("storage", "tree"),
            ("dict.url", "http://localhost/english.0"),
        ]);
    }
}
