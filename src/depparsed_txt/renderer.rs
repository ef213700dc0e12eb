use crate::depparsed_txt::parser::DepParsedSentence;

// Renders a sentence as a tikz-dependency `dependency` environment: a
// `deptext` row listing the tokens plus a trailing ROOT column, then one
// `\depedge{head}{position}{label}` directive per token. Positions are
// 1-based and a head of 0 points at the ROOT column. Heads-only sentences
// get edges with empty label text. Purely derived; the record is untouched.
pub fn render_depparsed_latex(sentence: &DepParsedSentence) -> String {
    let header = sentence
        .tokens()
        .iter()
        .map(String::as_str)
        .chain(["ROOT"])
        .collect::<Vec<_>>()
        .join(" \\& ");

    let mut edges = String::new();
    for (i, (_, _, head, label)) in sentence.iter().enumerate() {
        edges.push_str(&format!(
            "    \\depedge{{{}}}{{{}}}{{{}}}\n",
            head,
            i + 1,
            label.unwrap_or("")
        ));
    }

    format!(
        "\\begin{{dependency}}[theme=default]\n    \\begin{{deptext}}[column sep=1em, row sep=1em]\n    {} \\\\\n    \\end{{deptext}}\n{}\\end{{dependency}}",
        header, edges
    )
}
