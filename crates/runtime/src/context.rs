use tools::position::Position;

/// Frame of the evaluation, only used to build tracebacks. The chain goes
/// from the running frame up to the root frame of the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub display_name: String,
    pub parent: Option<Box<Context>>,
    // Where the parent frame entered this one
    pub parent_entry_pos: Option<Position>,
}

impl Context {
    pub fn new_root(display_name: &str) -> Self {
        Self {
            display_name: display_name.into(),
            parent: None,
            parent_entry_pos: None,
        }
    }

    /// Traceback lines, outermost frame first. `pos` is where the error
    /// happened inside this frame.
    pub fn trace_lines(&self, pos: &Position) -> Vec<String> {
        let mut lines: Vec<String> = vec![];
        let mut pos = pos;
        let mut frame = Some(self);

        while let Some(ctx) = frame {
            lines.push(format!(
                "File {}, line {}, in {}",
                pos.file_name,
                pos.line + 1,
                ctx.display_name
            ));

            if let Some(entry) = ctx.parent_entry_pos.as_ref() {
                pos = entry;
            }
            frame = ctx.parent.as_deref();
        }

        lines.reverse();
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_frame_trace() {
        let ctx = Context::new_root("<program>");
        let pos = Position::new("main.ar", "1 / 0");

        assert_eq!(ctx.trace_lines(&pos), vec!["File main.ar, line 1, in <program>"]);
    }

    #[test]
    fn nested_frames_outermost_first() {
        let text = "1\n2\n3";
        let mut pos = Position::new("main.ar", text);

        let root = Context::new_root("<program>");
        // Entered from line 2
        pos.advance(Some('1')).advance(Some('\n'));
        let child = Context {
            display_name: "inner".into(),
            parent: Some(Box::new(root)),
            parent_entry_pos: Some(pos.clone()),
        };
        // Failed on line 3
        pos.advance(Some('2')).advance(Some('\n'));

        assert_eq!(
            child.trace_lines(&pos),
            vec![
                "File main.ar, line 2, in <program>",
                "File main.ar, line 3, in inner",
            ]
        );
    }
}
