use std::sync::LazyLock;

use regex::Regex;

// address, colon, opcode, then everything else (args and comment)
static LINE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<address>[0-9a-fA-F]+):\s+(?P<opcode>\S+)(?:\s+(?P<args>.*))?$")
        .expect("line grammar")
});

#[derive(Clone, Debug, PartialEq)]
pub enum LineRecord {
    Unformatted(String),
    Instruction {
        address: String,
        opcode: String,
        args: Option<String>,
    },
}

impl LineRecord {
    pub fn is_instruction(&self) -> bool {
        matches!(self, LineRecord::Instruction { .. })
    }
}

/// Classifies one line. Never fails: anything that is not an instruction is kept verbatim.
pub fn parse_line(raw: &str) -> LineRecord {
    let Some(caps) = LINE_GRAMMAR.captures(raw) else {
        log::trace!("Unformatted line: {raw:?}");
        return LineRecord::Unformatted(raw.to_owned());
    };

    LineRecord::Instruction {
        address: caps["address"].to_owned(),
        opcode: caps["opcode"].to_owned(),
        args: caps.name("args").map(|m| m.as_str().to_owned()),
    }
}

pub fn parse_block(text: &str) -> Vec<LineRecord> {
    text.lines().map(parse_line).collect()
}
