//! # Parsing Context
//!
//! Per-document block state, owned by a single `parse` call.
//!
//! State lives in a stack of [`StateFrame`]s. Entering a construct pushes a
//! copy of the current frame under a new [`FrameName`]; leaving it pops back,
//! which restores the exact prior state. The root frame is never popped.
//!
//! Nesting stacks inside a frame are [`SharedStack`]s, so the copy made on
//! every push shares its nodes with the frame below instead of cloning them.
//!
//! Block rules mutate the context only through the methods here. The context
//! also owns the document lines and the current-line cursor, which is the only
//! lookahead channel available to rules.

mod shared_stack;

use std::rc::Rc;

pub use shared_stack::SharedStack;

use super::blocks::kinds::Alignment;

/// Maximum number of simultaneously open list levels.
pub const MAX_LIST_DEPTH: usize = 5;

/// Names the construct a frame was pushed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameName {
    Root,
    Paragraph,
    List,
    BlockQuote,
    Table,
    Heading,
}

/// One open list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLevel {
    /// Column of the list marker.
    pub indent: usize,
    /// `1.` style marker rather than `-`, `*` or `+`.
    pub ordered: bool,
}

/// Snapshot of block-level flags and nesting stacks.
#[derive(Debug, Clone)]
pub struct StateFrame {
    pub name: FrameName,
    pub in_paragraph: bool,
    pub list_active: bool,
    pub heading_active: bool,
    pub in_blockquote: bool,
    pub in_table: bool,
    pub table_alignments: Rc<[Alignment]>,
    pub table_header_row_index: Option<usize>,
    pub list_indent_stack: SharedStack<ListLevel>,
    pub quote_depth_stack: SharedStack<usize>,
    /// The innermost quote level has emitted content since it was entered.
    pub quote_has_content: bool,
}

impl StateFrame {
    fn root() -> Self {
        Self {
            name: FrameName::Root,
            in_paragraph: false,
            list_active: false,
            heading_active: false,
            in_blockquote: false,
            in_table: false,
            table_alignments: Rc::from(Vec::new()),
            table_header_row_index: None,
            list_indent_stack: SharedStack::new(),
            quote_depth_stack: SharedStack::new(),
            quote_has_content: false,
        }
    }
}

pub struct ParsingContext<'src> {
    lines: &'src [&'src str],
    current_line: usize,
    frames: Vec<StateFrame>,
}

impl<'src> ParsingContext<'src> {
    pub fn new(lines: &'src [&'src str]) -> Self {
        Self {
            lines,
            current_line: 0,
            frames: vec![StateFrame::root()],
        }
    }

    // ---- lines & cursor ----

    pub fn lines(&self) -> &'src [&'src str] {
        self.lines
    }

    pub fn line(&self, index: usize) -> Option<&'src str> {
        self.lines.get(index).copied()
    }

    pub fn current_line_index(&self) -> usize {
        self.current_line
    }

    /// The line after the current one, if any.
    pub fn peek_next_line(&self) -> Option<&'src str> {
        self.line(self.current_line + 1)
    }

    /// Moves the cursor to `index`, marking every line up to it as consumed.
    /// The cursor never moves backwards.
    pub fn advance_to(&mut self, index: usize) {
        self.current_line = self.current_line.max(index);
    }

    /// Steps to the next line.
    pub fn advance(&mut self) {
        self.current_line += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.current_line >= self.lines.len()
    }

    // ---- frames ----

    pub fn frame(&self) -> &StateFrame {
        // The root frame is never popped.
        &self.frames[self.frames.len() - 1]
    }

    fn frame_mut(&mut self) -> &mut StateFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn frame_name(&self) -> FrameName {
        self.frame().name
    }

    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    fn push_frame(&mut self, name: FrameName) {
        let mut frame = self.frame().clone();
        frame.name = name;
        self.frames.push(frame);
    }

    /// Pops frames down to and including the most recent one named `name`.
    /// Returns false (and pops nothing) when no such frame is open.
    fn pop_frame_named(&mut self, name: FrameName) -> bool {
        let Some(pos) = self.frames.iter().rposition(|f| f.name == name) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        self.frames.truncate(pos);
        true
    }

    // ---- paragraph ----

    pub fn in_paragraph(&self) -> bool {
        self.frame().in_paragraph
    }

    pub fn enter_paragraph(&mut self) {
        self.push_frame(FrameName::Paragraph);
        self.frame_mut().in_paragraph = true;
    }

    pub fn leave_paragraph(&mut self) -> bool {
        if !self.in_paragraph() {
            return false;
        }
        if !self.pop_frame_named(FrameName::Paragraph) {
            self.frame_mut().in_paragraph = false;
        }
        true
    }

    // ---- heading ----

    pub fn heading_active(&self) -> bool {
        self.frame().heading_active
    }

    pub fn enter_heading(&mut self) {
        self.push_frame(FrameName::Heading);
        self.frame_mut().heading_active = true;
    }

    pub fn leave_heading(&mut self) -> bool {
        if !self.heading_active() {
            return false;
        }
        if !self.pop_frame_named(FrameName::Heading) {
            self.frame_mut().heading_active = false;
        }
        true
    }

    // ---- lists ----

    pub fn list_active(&self) -> bool {
        self.frame().list_active
    }

    pub fn list_depth(&self) -> usize {
        self.frame().list_indent_stack.len()
    }

    pub fn current_list_level(&self) -> Option<ListLevel> {
        self.frame().list_indent_stack.peek().copied()
    }

    /// Opens a list level. Returns false when [`MAX_LIST_DEPTH`] levels are
    /// already open, leaving the stack unchanged.
    pub fn enter_list_level(&mut self, level: ListLevel) -> bool {
        if self.list_depth() >= MAX_LIST_DEPTH {
            return false;
        }
        if !self.list_active() {
            self.push_frame(FrameName::List);
        }
        let frame = self.frame_mut();
        frame.list_active = true;
        frame.list_indent_stack.push(level);
        true
    }

    /// Closes the innermost list level; leaving the last one pops the list frame.
    pub fn leave_list_level(&mut self) -> Option<ListLevel> {
        let frame = self.frame_mut();
        let level = frame.list_indent_stack.pop()?;
        if frame.list_indent_stack.is_empty() && !self.pop_frame_named(FrameName::List) {
            self.frame_mut().list_active = false;
        }
        Some(level)
    }

    // ---- blockquotes ----

    pub fn in_blockquote(&self) -> bool {
        self.frame().in_blockquote
    }

    pub fn quote_depth(&self) -> usize {
        self.frame().quote_depth_stack.len()
    }

    pub fn enter_quote_level(&mut self) -> usize {
        if !self.in_blockquote() {
            self.push_frame(FrameName::BlockQuote);
        }
        let frame = self.frame_mut();
        frame.in_blockquote = true;
        let depth = frame.quote_depth_stack.len() + 1;
        frame.quote_depth_stack.push(depth);
        frame.quote_has_content = false;
        depth
    }

    pub fn quote_has_content(&self) -> bool {
        self.frame().quote_has_content
    }

    /// Records that the innermost quote level emitted content.
    pub fn mark_quote_content(&mut self) {
        self.frame_mut().quote_has_content = true;
    }

    /// Closes the innermost quote level, returning its depth.
    pub fn leave_quote_level(&mut self) -> Option<usize> {
        let frame = self.frame_mut();
        let depth = frame.quote_depth_stack.pop()?;
        frame.quote_has_content = false;
        if frame.quote_depth_stack.is_empty() && !self.pop_frame_named(FrameName::BlockQuote) {
            self.frame_mut().in_blockquote = false;
        }
        Some(depth)
    }

    // ---- tables ----

    pub fn in_table(&self) -> bool {
        self.frame().in_table
    }

    pub fn begin_table(&mut self, header_row_index: usize, alignments: Vec<Alignment>) {
        self.push_frame(FrameName::Table);
        let frame = self.frame_mut();
        frame.in_table = true;
        frame.table_header_row_index = Some(header_row_index);
        frame.table_alignments = Rc::from(alignments);
    }

    pub fn table_alignments(&self) -> &[Alignment] {
        &self.frame().table_alignments
    }

    /// Alignment of column `index`, left when the separator row had no entry.
    pub fn column_alignment(&self, index: usize) -> Alignment {
        self.table_alignments()
            .get(index)
            .copied()
            .unwrap_or_default()
    }

    pub fn table_header_row_index(&self) -> Option<usize> {
        self.frame().table_header_row_index
    }

    pub fn end_table(&mut self) -> bool {
        self.pop_frame_named(FrameName::Table)
    }
}
