#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

peg::parser! {
    /// Grammar for pulling grading metadata out of Java annotation text.
    pub grammar parser() for str {
        /// matches any number of whitespace characters
        rule whitespace() = quiet!{[' ' | '\n' | '\t' | '\r']+}

        /// a single point label
        rule label() -> String
            = w:['a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.']+
            { w.iter().collect::<String>() }

        /// whitespace-separated labels inside the quoted annotation value
        rule labels() -> Vec<String>
            = l:(label() ** whitespace()) { l }

        /// parses a points annotation, e.g. `@Points("arith-funcs bonus")`,
        /// and returns its labels in order; trailing text is ignored
        pub rule points_annotation() -> Vec<String>
            = "@Points" whitespace()? "(" whitespace()?
              "\"" whitespace()? l:labels() whitespace()? "\""
              whitespace()? ")" [_]*
            { l }
    }
}
