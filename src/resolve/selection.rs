use serde::Serialize;

use super::ResolveError;

/// A (container, offset) pair identifying where editing is occurring.
///
/// The offset is carried verbatim from the surface; the resolver addresses
/// lines by container only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boundary<Id> {
    pub container: Id,
    pub offset: usize,
}

/// One contiguous range of a selection, as a start/end boundary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawRange<Id> {
    pub start: Boundary<Id>,
    pub end: Boundary<Id>,
}

impl<Id: Copy> RawRange<Id> {
    /// A collapsed range with both boundaries at the same point.
    pub const fn collapsed(container: Id, offset: usize) -> Self {
        let boundary = Boundary { container, offset };
        Self {
            start: boundary,
            end: boundary,
        }
    }
}

/// What the editing surface reports per edit event: the composed ranges of
/// its selection, in composition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSnapshot<Id> {
    pub ranges: Vec<RawRange<Id>>,
}

impl<Id: Copy> SelectionSnapshot<Id> {
    /// A snapshot holding a single collapsed range (a caret).
    pub fn caret(container: Id, offset: usize) -> Self {
        Self {
            ranges: vec![RawRange::collapsed(container, offset)],
        }
    }

    /// The snapshot an unfocused surface reports: no ranges at all.
    pub const fn unfocused() -> Self {
        Self { ranges: Vec::new() }
    }
}

/// The currently active contiguous range: the first composed range when
/// several are reported.
///
/// # Errors
///
/// [`ResolveError::NoActiveRange`] when the range list is empty. Callers
/// must treat this as "drop the event"; nothing downstream may run.
pub fn active_range<Id>(snapshot: &SelectionSnapshot<Id>) -> Result<&RawRange<Id>, ResolveError> {
    snapshot.ranges.first().ok_or(ResolveError::NoActiveRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_range_picks_first_of_several() {
        let snapshot = SelectionSnapshot {
            ranges: vec![RawRange::collapsed(7u32, 3), RawRange::collapsed(9u32, 0)],
        };
        let range = active_range(&snapshot).unwrap();
        assert_eq!(range.start.container, 7);
        assert_eq!(range.start.offset, 3);
    }

    #[test]
    fn test_active_range_of_caret() {
        let snapshot = SelectionSnapshot::caret(1u32, 5);
        let range = active_range(&snapshot).unwrap();
        assert_eq!(range.start, range.end);
        assert_eq!(range.end.offset, 5);
    }

    #[test]
    fn test_empty_selection_is_no_active_range() {
        let snapshot: SelectionSnapshot<u32> = SelectionSnapshot::unfocused();
        assert_eq!(active_range(&snapshot), Err(ResolveError::NoActiveRange));
    }
}
