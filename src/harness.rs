use std::io::Write;

use log::debug;

use crate::error::status_code;
use crate::list::{List, Node, push_front};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Push(Vec<i32>),
    ErrNullList,
    ErrNullNode,
    Unknown(String),
}

#[derive(Debug)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    /// `args` includes the program name, as `std::env::args` yields it.
    pub fn build(args: &[String]) -> Result<Config, &'static str> {
        if args.len() < 2 {
            return Err("not enough arguments");
        }

        let mode = match args[1].as_str() {
            "push" => Mode::Push(args[2..].iter().map(|arg| parse_int(arg)).collect()),
            "err_null_list" => Mode::ErrNullList,
            "err_null_node" => Mode::ErrNullNode,
            other => Mode::Unknown(other.to_string()),
        };

        Ok(Config { mode })
    }
}

/// Parses like C `atoi`: leading ASCII whitespace, an optional sign, then as many
/// decimal digits as are present. Anything else yields 0. Saturates at the
/// `i32` bounds.
pub fn parse_int(s: &str) -> i32 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(|b| b.is_ascii_digit()) {
        acc = acc * 10 + i64::from(b - b'0');
        if acc > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let value = if negative { -acc } else { acc };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub fn run(config: Config, out: &mut impl Write) -> std::io::Result<()> {
    match config.mode {
        Mode::Push(values) => {
            let mut list = List::new();
            for value in values {
                list.push_front(Node::new(value));
            }

            for value in &list {
                write!(out, " {}", value)?;
            }
            writeln!(out)?;
        }
        Mode::ErrNullList => {
            let node = Node::new(10);
            let rc = status_code(&push_front(None, Some(node)));
            writeln!(out, "list_push_front returned {}", rc)?;
        }
        Mode::ErrNullNode => {
            let mut list = List::new();
            let rc = status_code(&push_front(Some(&mut list), None));
            writeln!(out, "list_push_front returned {}", rc)?;
        }
        Mode::Unknown(name) => {
            debug!("unknown mode {:?}, nothing to do", name);
        }
    }

    Ok(())
}
