//! Java identifier rules for generated constant names.

use std::{collections::HashSet, sync::LazyLock};

/// Java keywords and literals that can not be used as a constant name.
static JAVA_RESERVED_SYMBOLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
        "true",
        "false",
        "null",
    ]
    .into_iter()
    .collect()
});

/// Returns true if `symbol` may be used as a Java constant name.
///
/// The comparison is exact and case-sensitive: `class` is rejected, `Class` is not.
#[must_use]
pub fn is_valid_symbol(symbol: &str) -> bool {
    !JAVA_RESERVED_SYMBOLS.contains(symbol)
}

/// Java symbols can not contain `.` or `-`, but resource names can. Replaces both with `_`.
#[must_use]
pub fn transform(symbol: &str) -> String {
    symbol.replace(['.', '-'], "_")
}
