//! Stacking-order scale for overlay layers.
//!
//! A standard z-index ladder so overlays stack predictably without magic
//! numbers scattered through component styles.

/// Named stacking layers, lowest to highest.
///
/// `Zero` and `Content` are legacy slots kept for existing call sites;
/// prefer the named overlay layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZIndex {
    Zero,
    Content,
    Dropdown,
    Sticky,
    Fixed,
    ModalBackdrop,
    Offcanvas,
    Modal,
    Popover,
    Tooltip,
}

impl ZIndex {
    /// Every layer, lowest to highest.
    pub const ALL: [ZIndex; 10] = [
        ZIndex::Zero,
        ZIndex::Content,
        ZIndex::Dropdown,
        ZIndex::Sticky,
        ZIndex::Fixed,
        ZIndex::ModalBackdrop,
        ZIndex::Offcanvas,
        ZIndex::Modal,
        ZIndex::Popover,
        ZIndex::Tooltip,
    ];

    /// The CSS z-index value for this layer.
    pub fn value(self) -> u32 {
        match self {
            ZIndex::Zero => 0,
            ZIndex::Content => 1,
            ZIndex::Dropdown => 1000,
            ZIndex::Sticky => 1020,
            ZIndex::Fixed => 1030,
            ZIndex::ModalBackdrop => 1040,
            ZIndex::Offcanvas => 1050,
            ZIndex::Modal => 1060,
            ZIndex::Popover => 1070,
            ZIndex::Tooltip => 1080,
        }
    }
}
