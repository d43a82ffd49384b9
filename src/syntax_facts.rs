// Copyright (c) ZeroC, Inc.

//! This module holds the pure classification tables shared between the lexer and the tools built
//! on top of it: the directive table (which the lexer consults to pick its follow-on mode) and the
//! reserved-word table (which the lexer does *not* consult — it always returns identifiers and
//! lets a parser reclassify them).

/// This enum specifies all the directives the preprocessor understands.
/// Any other backquote-prefixed name is a usage of a user-defined macro.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveKind {
    BeginKeywords,      // "begin_keywords"
    CellDefine,         // "celldefine"
    DefaultNettype,     // "default_nettype"
    Define,             // "define"
    Else,               // "else"
    Elsif,              // "elsif"
    EndCellDefine,      // "endcelldefine"
    EndIf,              // "endif"
    EndKeywords,        // "end_keywords"
    IfDef,              // "ifdef"
    IfNDef,             // "ifndef"
    Include,            // "include"
    Line,               // "line"
    NoUnconnectedDrive, // "nounconnected_drive"
    Pragma,             // "pragma"
    ResetAll,           // "resetall"
    Timescale,          // "timescale"
    UnconnectedDrive,   // "unconnected_drive"
    Undef,              // "undef"
    UndefineAll,        // "undefineall"

    /// The name is not a built-in directive, so it must be a usage of a user-defined macro.
    MacroUsage,
}

/// Checks if a directive name corresponds to a built-in directive. If it does, return that
/// directive's kind. Otherwise, return [`DirectiveKind::MacroUsage`].
pub fn directive_kind(name: &str) -> DirectiveKind {
    debug_assert!(!name.is_empty());

    match name {
        "begin_keywords" => DirectiveKind::BeginKeywords,
        "celldefine" => DirectiveKind::CellDefine,
        "default_nettype" => DirectiveKind::DefaultNettype,
        "define" => DirectiveKind::Define,
        "else" => DirectiveKind::Else,
        "elsif" => DirectiveKind::Elsif,
        "endcelldefine" => DirectiveKind::EndCellDefine,
        "endif" => DirectiveKind::EndIf,
        "end_keywords" => DirectiveKind::EndKeywords,
        "ifdef" => DirectiveKind::IfDef,
        "ifndef" => DirectiveKind::IfNDef,
        "include" => DirectiveKind::Include,
        "line" => DirectiveKind::Line,
        "nounconnected_drive" => DirectiveKind::NoUnconnectedDrive,
        "pragma" => DirectiveKind::Pragma,
        "resetall" => DirectiveKind::ResetAll,
        "timescale" => DirectiveKind::Timescale,
        "unconnected_drive" => DirectiveKind::UnconnectedDrive,
        "undef" => DirectiveKind::Undef,
        "undefineall" => DirectiveKind::UndefineAll,
        _ => DirectiveKind::MacroUsage,
    }
}

/// Checks if an identifier is one of the reserved words of IEEE 1800-2017.
/// The lexer itself never calls this; reserved words lex as plain identifiers and parsers use this
/// table to reclassify them.
pub fn is_keyword(identifier: &str) -> bool {
    matches!(
        identifier,
        "accept_on" | "alias" | "always" | "always_comb" | "always_ff" | "always_latch" | "and" | "assert"
            | "assign" | "assume" | "automatic" | "before" | "begin" | "bind" | "bins" | "binsof" | "bit" | "break"
            | "buf" | "bufif0" | "bufif1" | "byte" | "case" | "casex" | "casez" | "cell" | "chandle" | "checker"
            | "class" | "clocking" | "cmos" | "config" | "const" | "constraint" | "context" | "continue" | "cover"
            | "covergroup" | "coverpoint" | "cross" | "deassign" | "default" | "defparam" | "design" | "disable"
            | "dist" | "do" | "edge" | "else" | "end" | "endcase" | "endchecker" | "endclass" | "endclocking"
            | "endconfig" | "endfunction" | "endgenerate" | "endgroup" | "endinterface" | "endmodule" | "endpackage"
            | "endprimitive" | "endprogram" | "endproperty" | "endspecify" | "endsequence" | "endtable" | "endtask"
            | "enum" | "event" | "eventually" | "expect" | "export" | "extends" | "extern" | "final" | "first_match"
            | "for" | "force" | "foreach" | "forever" | "fork" | "forkjoin" | "function" | "generate" | "genvar"
            | "global" | "highz0" | "highz1" | "if" | "iff" | "ifnone" | "ignore_bins" | "illegal_bins"
            | "implements" | "implies" | "import" | "incdir" | "include" | "initial" | "inout" | "input" | "inside"
            | "instance" | "int" | "integer" | "interconnect" | "interface" | "intersect" | "join" | "join_any"
            | "join_none" | "large" | "let" | "liblist" | "library" | "local" | "localparam" | "logic" | "longint"
            | "macromodule" | "matches" | "medium" | "modport" | "module" | "nand" | "negedge" | "nettype" | "new"
            | "nexttime" | "nmos" | "nor" | "noshowcancelled" | "not" | "notif0" | "notif1" | "null" | "or"
            | "output" | "package" | "packed" | "parameter" | "pmos" | "posedge" | "primitive" | "priority"
            | "program" | "property" | "protected" | "pull0" | "pull1" | "pulldown" | "pullup"
            | "pulsestyle_ondetect" | "pulsestyle_onevent" | "pure" | "rand" | "randc" | "randcase" | "randsequence"
            | "rcmos" | "real" | "realtime" | "ref" | "reg" | "reject_on" | "release" | "repeat" | "restrict"
            | "return" | "rnmos" | "rpmos" | "rtran" | "rtranif0" | "rtranif1" | "s_always" | "s_eventually"
            | "s_nexttime" | "s_until" | "s_until_with" | "scalared" | "sequence" | "shortint" | "shortreal"
            | "showcancelled" | "signed" | "small" | "soft" | "solve" | "specify" | "specparam" | "static"
            | "string" | "strong" | "strong0" | "strong1" | "struct" | "super" | "supply0" | "supply1"
            | "sync_accept_on" | "sync_reject_on" | "table" | "tagged" | "task" | "this" | "throughout" | "time"
            | "timeprecision" | "timeunit" | "tran" | "tranif0" | "tranif1" | "tri" | "tri0" | "tri1" | "triand"
            | "trior" | "trireg" | "type" | "typedef" | "union" | "unique" | "unique0" | "unsigned" | "until"
            | "until_with" | "untyped" | "use" | "uwire" | "var" | "vectored" | "virtual" | "void" | "wait"
            | "wait_order" | "wand" | "weak" | "weak0" | "weak1" | "while" | "wildcard" | "wire" | "with" | "within"
            | "wor" | "xnor" | "xor"
    )
}
