/// The drawing tools a session can have active. Exactly one is active at
/// a time; the session's pointer state machine branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
    Pencil,
    Eraser,
    Fill,
    Text,
    Rectangle,
    Square,
    Oval,
    Circle,
    Triangle,
}

impl Tool {
    /// Shape tools draw a live preview during the drag and commit on
    /// pointer-up; everything else commits earlier.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Tool::Rectangle | Tool::Square | Tool::Oval | Tool::Circle | Tool::Triangle
        )
    }

    /// Fill and Text are single-shot: their whole effect lands on
    /// pointer-down and the drag that follows is ignored.
    pub fn commits_on_press(&self) -> bool {
        matches!(self, Tool::Fill | Tool::Text)
    }

    /// Display label for the host UI's toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
            Tool::Text => "Text",
            Tool::Rectangle => "Rectangle",
            Tool::Square => "Square",
            Tool::Oval => "Oval",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
        }
    }

    pub fn all() -> &'static [Tool] {
        &[
            Tool::Pencil,
            Tool::Eraser,
            Tool::Fill,
            Tool::Text,
            Tool::Rectangle,
            Tool::Square,
            Tool::Oval,
            Tool::Circle,
            Tool::Triangle,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_predicates_partition_the_tool_set() {
        for &tool in Tool::all() {
            // A tool is either freehand, single-shot, or a drag-to-commit
            // shape; never two of those at once.
            let freehand = matches!(tool, Tool::Pencil | Tool::Eraser);
            assert_eq!(tool.is_shape(), !freehand && !tool.commits_on_press());
            assert!(!tool.label().is_empty());
        }
    }
}
