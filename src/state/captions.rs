/// Idle and in-progress wording for one family of submit buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caption {
    pub idle: &'static str,
    pub in_progress: &'static str,
}

pub const ADD: Caption = Caption {
    idle: "Создать",
    in_progress: "Сохранение...",
};

pub const DELETE: Caption = Caption {
    idle: "Да",
    in_progress: "Удаление...",
};

pub const OTHERS: Caption = Caption {
    idle: "Сохранить",
    in_progress: "Сохранение...",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionSlot {
    Add,
    Delete,
    Others,
}

/// Labels currently shown on the add, delete and save buttons.
///
/// Always replaced as a whole: at most one slot carries in-progress wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonCaptions {
    pub add: &'static str,
    pub delete: &'static str,
    pub others: &'static str,
}

impl ButtonCaptions {
    pub const IDLE: ButtonCaptions = ButtonCaptions {
        add: ADD.idle,
        delete: DELETE.idle,
        others: OTHERS.idle,
    };

    pub fn in_progress(slot: CaptionSlot) -> Self {
        match slot {
            CaptionSlot::Add => Self {
                add: ADD.in_progress,
                ..Self::IDLE
            },
            CaptionSlot::Delete => Self {
                delete: DELETE.in_progress,
                ..Self::IDLE
            },
            CaptionSlot::Others => Self {
                others: OTHERS.in_progress,
                ..Self::IDLE
            },
        }
    }
}

impl Default for ButtonCaptions {
    fn default() -> Self {
        Self::IDLE
    }
}
