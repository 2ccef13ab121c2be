mod note;

pub use note::Note;

/// Position of every note carrying `id`, in list order.
pub fn positions_of(notes: &[Note], id: i64) -> Vec<usize> {
    notes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.id == id)
        .map(|(i, _)| i)
        .collect()
}
