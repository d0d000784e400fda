//! Markdown rendering for extracted declarations.

use crate::model::Decl;

impl Decl {
    /// Render this declaration as one markdown block: a horizontal rule,
    /// an anchor for intra-document links, the signature in a `<pre>`
    /// block, then the typeset comment body.
    pub fn markdown(&self) -> String {
        format!(
            "------------\n<a id=\"{}\"></a><pre>\n{};\n</pre>\n{}\n",
            self.name,
            self.signature,
            typeset(&self.comment)
        )
    }
}

/// Render comment text with verbatim sections into markdown.
///
/// A line starting with a space is verbatim; each run of verbatim lines
/// is wrapped in a fenced code block. The result is then shaped into a
/// single markdown list item: the first line gets the item marker and
/// every later non-empty line is indented under it (empty lines are left
/// empty so no trailing whitespace is produced).
pub fn typeset(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut fence = false;
    for line in text.split('\n') {
        if fence != line.starts_with(' ') {
            lines.push("```".to_string());
            fence = !fence;
        }
        lines.push(line.to_string());
    }
    if fence {
        lines.push("```".to_string());
    }

    for (i, line) in lines.iter_mut().enumerate() {
        if i == 0 {
            *line = format!(" -  {}", line);
        } else if !line.is_empty() {
            *line = format!("    {}", line);
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prose_only_becomes_a_list_item() {
        assert_eq!(typeset("Adds two numbers."), " -  Adds two numbers.");
    }

    #[test]
    fn later_lines_are_indented() {
        assert_eq!(typeset("first\nsecond"), " -  first\n    second");
    }

    #[test]
    fn empty_lines_stay_empty() {
        assert_eq!(typeset("first\n\nthird"), " -  first\n\n    third");
    }

    #[test]
    fn indented_run_is_fenced() {
        let out = typeset("prose\n  code\nmore prose");
        assert_eq!(
            out,
            " -  prose\n    ```\n      code\n    ```\n    more prose"
        );
    }

    #[test]
    fn fence_still_open_at_end_is_closed() {
        let out = typeset("prose\n  code");
        assert_eq!(out, " -  prose\n    ```\n      code\n    ```");
    }

    #[test]
    fn alternating_runs_produce_balanced_fences() {
        let out = typeset("a\n  b\nc\n  d");
        let fences = out.lines().filter(|l| l.trim() == "```").count();
        assert_eq!(fences, 4);
        // No two consecutive fence delimiters.
        let lines: Vec<&str> = out.lines().collect();
        for pair in lines.windows(2) {
            assert!(!(pair[0].trim() == "```" && pair[1].trim() == "```"));
        }
    }

    #[test]
    fn leading_verbatim_line_opens_fence_first() {
        assert_eq!(typeset("  code"), " -  ```\n      code\n    ```");
    }

    #[test]
    fn markdown_block_shape() {
        let d = Decl::new(" Frees a vector. ", "void vec_free(vec_t *v);").unwrap();
        assert_eq!(
            d.markdown(),
            "------------\n<a id=\"vec_free\"></a><pre>\nvoid vec_free(vec_t *v);\n</pre>\n -  Frees a vector.\n"
        );
    }
}
