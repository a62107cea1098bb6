use crate::arch::ArchitectureDef;

// Notation and register strings are regex sources. For registers that share a
// prefix the longer name has to come first (r1[0-5] before r[0-9]), otherwise
// the alternation stops at the shorter one.
pub const ARCHITECTURES: &[ArchitectureDef] = &[
    ArchitectureDef {
        key: "m68k",
        name: "Motorola M68000",
        hex_notation: r"\$",
        hex_postfix: false,
        zero_prefix: false,
        opcode_sizes: true,
        registers: "pc|sr|ccr|[us]sp|sp|d[0-7]|a[0-7]",
    },
    ArchitectureDef {
        key: "sh2",
        name: "Hitachi SH-2",
        hex_notation: r"\$",
        hex_postfix: false,
        zero_prefix: false,
        opcode_sizes: true,
        registers: "pc|sr|gbr|r1[0-5]|r[0-9]",
    },
    ArchitectureDef {
        key: "z80",
        name: "Zilog Z80",
        hex_notation: r"\$",
        hex_postfix: false,
        zero_prefix: false,
        opcode_sizes: false,
        registers: "pc|sp|af'|af|a|f|bc'|bc|b|c|de'|de|d|e|hl'|hl|h|l|ei[xy]|i|r",
    },
    ArchitectureDef {
        key: "6502",
        name: "MOS 6502",
        hex_notation: r"\$",
        hex_postfix: false,
        zero_prefix: false,
        opcode_sizes: false,
        registers: "pc|sp|a|x|y|p",
    },
    ArchitectureDef {
        key: "i960",
        name: "Intel i960",
        hex_notation: "0x",
        hex_postfix: false,
        zero_prefix: false,
        opcode_sizes: false,
        registers: "pc|sp|r1[0-5]|r[0-9]|g1[0-5]|g[0-9]",
    },
    ArchitectureDef {
        key: "h8",
        name: "Hitachi H8",
        hex_notation: "h'",
        hex_postfix: false,
        zero_prefix: false,
        opcode_sizes: true,
        registers: "pc|ccr|r[0-7][hl]|r[0-7]",
    },
    ArchitectureDef {
        key: "8086",
        name: "Intel 8086/8088",
        hex_notation: "h",
        hex_postfix: true,
        zero_prefix: true,
        opcode_sizes: false,
        registers: "pc|[acdb][xhl]|[sb]p|[sd]i|[cdse]s",
    },
    ArchitectureDef {
        key: "x86",
        name: "Intel x86 (32bit)",
        hex_notation: "h",
        hex_postfix: true,
        zero_prefix: true,
        opcode_sizes: false,
        registers: "pc|e[acdb]x|[acdb][xhl]|e[sb]p|[sb]p|e[sd]i|[sd]i|[cdsefg]s|dr[0-7]|cr[0-7]|tr[3-7]",
    },
    ArchitectureDef {
        key: "arm",
        name: "ARM",
        hex_notation: r"\$",
        hex_postfix: false,
        zero_prefix: false,
        opcode_sizes: false,
        registers: "pc|r1[0-5]|r[0-9]",
    },
];

/// A short 68000 listing in the MAME debugger format, with labels and comments.
pub const SAMPLE_LISTING: &str = "\
004A66: moveq   #$2a, D6                       ; D6 stores the offset for the string table - 2A is '1UP'
004A68: jsr     $c100{disp_string}
004A6E: moveq   #$2b, D6                       ; 0x2B - HISCORE
004A70: jsr     $c100{disp_string}
004A76: moveq   #$0, D6                        ; 0 - the initial 00 scores under 1UP and HISCORE
004A78: jsr     $c100{disp_string}
004A7E: tst.w   $40902a{multiplayer_flag}      ; are we in multiplayer mode?
004A84: beq     $4a96                          ; if not branch below and skip the 2P stuff
004A86: moveq   #$2c, D6                       ; 0x2C - 2UP
004A88: jsr     $c100{disp_string}
004A8E: moveq   #$2d, D6                       ; 0x2D - MUTEKI, not in revision C
004A90: jsr     $c100{disp_string}
-- end of routine --";
