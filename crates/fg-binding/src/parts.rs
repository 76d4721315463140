//! Data model for parsed interpolations.

/// One piece of a parsed interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Part {
    /// Literal text, used verbatim in the rendered output.
    Literal(String),
    /// Raw source of an embedded expression, handed to the external compiler.
    Expression(String),
}

impl Part {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Part::Literal(text) => Some(text),
            Part::Expression(_) => None,
        }
    }

    pub fn as_expression(&self) -> Option<&str> {
        match self {
            Part::Literal(_) => None,
            Part::Expression(source) => Some(source),
        }
    }
}

/// Alternating literal/expression parts of one interpolated value.
///
/// The sequence always has odd length: it starts and ends with a literal
/// (possibly empty) and carries at least one expression. A value without any
/// live placeholder never becomes a `PartSequence`; it stays
/// [`Content::Static`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PartSequence {
    parts: Vec<Part>,
}

impl PartSequence {
    pub(crate) fn from_parts(parts: Vec<Part>) -> Self {
        debug_assert!(
            parts.len() % 2 == 1
                && parts.iter().enumerate().all(|(i, part)| match part {
                    Part::Literal(_) => i % 2 == 0,
                    Part::Expression(_) => i % 2 == 1,
                }),
            "part sequences alternate literal/expression and end on a literal"
        );
        Self { parts }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Literal parts in order (even positions).
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(Part::as_literal)
    }

    /// Raw expression sources in order (odd positions).
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(Part::as_expression)
    }

    pub fn expression_count(&self) -> usize {
        self.parts.len() / 2
    }

    /// The lone expression source when the whole value is exactly one
    /// placeholder with no surrounding text. Bindings use this to skip the
    /// join and write the expression value through unconverted.
    pub fn single_expression(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [Part::Literal(before), Part::Expression(source), Part::Literal(after)]
                if before.is_empty() && after.is_empty() =>
            {
                Some(source)
            }
            _ => None,
        }
    }

    fn prepend_literal(&mut self, text: &str) {
        if let Some(Part::Literal(first)) = self.parts.first_mut() {
            first.insert_str(0, text);
        }
    }

    fn append_literal(&mut self, text: &str) {
        if let Some(Part::Literal(last)) = self.parts.last_mut() {
            last.push_str(text);
        }
    }

    fn extend_with(&mut self, other: PartSequence) {
        let mut rest = other.parts.into_iter();
        // The first element is a literal by construction; it fuses with our
        // trailing literal so alternation survives the splice.
        if let Some(Part::Literal(first)) = rest.next() {
            self.append_literal(&first);
        }
        self.parts.extend(rest);
    }
}

/// Outcome of scanning an attribute or text-node value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Content {
    /// No unescaped placeholder. The carried text has escape sequences
    /// reduced (`\${` becomes `${`) and is the final static value.
    Static(String),
    /// At least one placeholder was found.
    Interpolated(PartSequence),
}

impl Content {
    pub fn is_interpolated(&self) -> bool {
        matches!(self, Content::Interpolated(_))
    }

    pub fn as_parts(&self) -> Option<&PartSequence> {
        match self {
            Content::Static(_) => None,
            Content::Interpolated(parts) => Some(parts),
        }
    }

    pub fn into_parts(self) -> Option<PartSequence> {
        match self {
            Content::Static(_) => None,
            Content::Interpolated(parts) => Some(parts),
        }
    }

    /// Merge the scan of two adjacent source fragments.
    ///
    /// Scanning the concatenation of two strings equals the concatenation of
    /// their individual scans, provided the cut point does not split a
    /// two-character token (`${`, `\$` or `\\`): static text fuses into the
    /// neighboring literal, and two part sequences splice by joining the
    /// last/first literals. Template compilers rely on this when stitching
    /// adjacent text chunks.
    pub fn concat(self, other: Content) -> Content {
        match (self, other) {
            (Content::Static(mut a), Content::Static(b)) => {
                a.push_str(&b);
                Content::Static(a)
            }
            (Content::Static(a), Content::Interpolated(mut parts)) => {
                parts.prepend_literal(&a);
                Content::Interpolated(parts)
            }
            (Content::Interpolated(mut parts), Content::Static(b)) => {
                parts.append_literal(&b);
                Content::Interpolated(parts)
            }
            (Content::Interpolated(mut parts), Content::Interpolated(other)) => {
                parts.extend_with(other);
                Content::Interpolated(parts)
            }
        }
    }
}
