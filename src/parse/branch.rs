/// Connector tokens drawn in front of a name, Unicode and ASCII styles.
const CONNECTORS: [&str; 5] = ["\u{251c}\u{2500}", "\u{2514}\u{2500}", "|--", "`--", "+--"];

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Leftovers of ragged connector runs such as `├───────`.
fn is_connector_residue(c: char) -> bool {
    matches!(c, '\u{2500}' | '\u{2014}' | '\u{2502}' | '|' | '-') || is_blank(c)
}

/// Strip branch decoration from the front of `rest`, exposing the name.
///
/// Leading dots are never touched, so `.gitignore` and `.env` come through
/// intact.
pub fn trim_branch(rest: &str) -> &str {
    let mut rest = rest.trim_start_matches(is_blank);

    while let Some(stripped) = CONNECTORS
        .iter()
        .find_map(move |connector| rest.strip_prefix(connector))
    {
        rest = stripped.trim_start_matches(is_blank);
    }

    rest.trim_start_matches(is_connector_residue)
        .trim_start_matches(is_blank)
}
