//! Unicode notation backend
//!
//! Reads the backslash notation used by the identity table and typesets it
//! into text rows:
//!
//! - `\theta` and friends become Greek glyphs
//! - `^2` becomes a superscript glyph where one exists, with a plain `^`
//!   fallback otherwise
//! - `\frac{num}{den}` stacks the numerator over a rule over the
//!   denominator, and inline composition aligns everything on the rule row
//!
//! Unknown commands degrade to their bare name rather than erroring; the
//! content table is trusted input.

use ratatui::style::Color;

use super::{FontSize, NotationRenderer, Rendered};

/// The default [`NotationRenderer`] backend.
pub struct UnicodeNotation;

impl NotationRenderer for UnicodeNotation {
    fn render(&self, notation: &str, size: FontSize, color: Color) -> Rendered {
        let nodes = Reader::new(notation).sequence(false);
        let block = layout_nodes(&nodes);
        Rendered {
            width: block.width as u16,
            height: block.rows.len() as u16,
            rows: block.rows,
            color,
            emphasized: size == FontSize::Large,
        }
    }
}

/// Parsed notation: literal runs, superscripts, fractions.
enum Node {
    Run(String),
    Sup(Vec<Node>),
    Frac(Vec<Node>, Vec<Node>),
}

struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {
    fn new(notation: &str) -> Self {
        Reader {
            chars: notation.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Parse nodes until end of input, or until the closing brace of the
    /// current group when `in_group` is set.
    fn sequence(&mut self, in_group: bool) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut run = String::new();

        while let Some(c) = self.peek() {
            match c {
                '}' if in_group => break,
                '\\' => {
                    self.bump();
                    let name = self.command_name();
                    if name == "frac" {
                        flush(&mut nodes, &mut run);
                        match (self.group(), self.group()) {
                            (Some(num), Some(den)) => nodes.push(Node::Frac(num, den)),
                            // missing braces: degrade to the bare name
                            _ => run.push_str("frac"),
                        }
                    } else if let Some(glyph) = greek(&name) {
                        run.push(glyph);
                    } else {
                        run.push_str(&name);
                    }
                }
                '^' => {
                    self.bump();
                    flush(&mut nodes, &mut run);
                    let body = match self.group() {
                        Some(group) => group,
                        None => match self.bump() {
                            Some(next) => vec![Node::Run(next.to_string())],
                            None => Vec::new(),
                        },
                    };
                    if !body.is_empty() {
                        nodes.push(Node::Sup(body));
                    }
                }
                '{' => {
                    flush(&mut nodes, &mut run);
                    if let Some(group) = self.group() {
                        nodes.extend(group);
                    }
                }
                _ => {
                    self.bump();
                    run.push(c);
                }
            }
        }

        flush(&mut nodes, &mut run);
        nodes
    }

    fn command_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            self.bump();
            name.push(c);
        }
        name
    }

    /// A brace-delimited group, or `None` if the next char is not `{`.
    fn group(&mut self) -> Option<Vec<Node>> {
        if self.peek() != Some('{') {
            return None;
        }
        self.bump();
        let nodes = self.sequence(true);
        if self.peek() == Some('}') {
            self.bump();
        }
        Some(nodes)
    }
}

fn flush(nodes: &mut Vec<Node>, run: &mut String) {
    if !run.is_empty() {
        nodes.push(Node::Run(std::mem::take(run)));
    }
}

fn greek(name: &str) -> Option<char> {
    match name {
        "theta" => Some('θ'),
        "alpha" => Some('α'),
        "beta" => Some('β'),
        "pi" => Some('π'),
        "phi" => Some('φ'),
        _ => None,
    }
}

fn superscript_char(c: char) -> Option<char> {
    match c {
        '0' => Some('⁰'),
        '1' => Some('¹'),
        '2' => Some('²'),
        '3' => Some('³'),
        '4' => Some('⁴'),
        '5' => Some('⁵'),
        '6' => Some('⁶'),
        '7' => Some('⁷'),
        '8' => Some('⁸'),
        '9' => Some('⁹'),
        '+' => Some('⁺'),
        '-' => Some('⁻'),
        '(' => Some('⁽'),
        ')' => Some('⁾'),
        _ => None,
    }
}

fn superscript(text: &str) -> Option<String> {
    text.chars().map(superscript_char).collect()
}

/// A rectangular block of rows with a baseline row index. Inline text sits
/// on the baseline; a fraction's baseline is its rule row.
struct Block {
    rows: Vec<String>,
    baseline: usize,
    width: usize,
}

impl Block {
    fn text(s: &str) -> Self {
        Block {
            width: s.chars().count(),
            rows: vec![s.to_owned()],
            baseline: 0,
        }
    }

    fn empty() -> Self {
        Block {
            rows: vec![String::new()],
            baseline: 0,
            width: 0,
        }
    }
}

fn layout_nodes(nodes: &[Node]) -> Block {
    let mut blocks = nodes.iter().map(layout_node);
    let first = match blocks.next() {
        Some(block) => block,
        None => return Block::empty(),
    };
    blocks.fold(first, hcat)
}

fn layout_node(node: &Node) -> Block {
    match node {
        Node::Run(text) => Block::text(text),
        Node::Sup(inner) => {
            let block = layout_nodes(inner);
            if block.rows.len() == 1 {
                if let Some(sup) = superscript(&block.rows[0]) {
                    return Block::text(&sup);
                }
            }
            hcat(Block::text("^"), block)
        }
        Node::Frac(num, den) => {
            let num = layout_nodes(num);
            let den = layout_nodes(den);
            let width = num.width.max(den.width) + 2;
            let mut rows = Vec::with_capacity(num.rows.len() + den.rows.len() + 1);
            for row in &num.rows {
                rows.push(center(row, width));
            }
            let baseline = rows.len();
            rows.push("─".repeat(width));
            for row in &den.rows {
                rows.push(center(row, width));
            }
            Block {
                rows,
                baseline,
                width,
            }
        }
    }
}

/// Concatenate two blocks horizontally, aligning their baselines.
fn hcat(left: Block, right: Block) -> Block {
    let baseline = left.baseline.max(right.baseline);
    let below = (left.rows.len() - left.baseline).max(right.rows.len() - right.baseline);
    let height = baseline + below;
    let width = left.width + right.width;

    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        let mut row = row_at(&left, i, baseline);
        row.push_str(&row_at(&right, i, baseline));
        rows.push(row);
    }

    Block {
        rows,
        baseline,
        width,
    }
}

/// The block's row as positioned against the shared baseline, padded to the
/// block's width; blank where the block has no row.
fn row_at(block: &Block, row: usize, baseline: usize) -> String {
    let offset = baseline - block.baseline;
    if row >= offset {
        if let Some(r) = block.rows.get(row - offset) {
            return pad(r, block.width);
        }
    }
    " ".repeat(block.width)
}

fn pad(row: &str, width: usize) -> String {
    let mut out = row.to_owned();
    for _ in row.chars().count()..width {
        out.push(' ');
    }
    out
}

fn center(row: &str, width: usize) -> String {
    let len = row.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    let mut out = " ".repeat(left);
    out.push_str(row);
    out.push_str(&" ".repeat(right));
    out
}
