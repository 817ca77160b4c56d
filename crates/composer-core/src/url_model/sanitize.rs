//! Filesystem-safe rendering of dataset IDs.

/// Linux NAME_MAX; the ID part is cut so the whole name stays under it.
const NAME_MAX: usize = 255;

/// Makes `id` usable inside a single path component.
///
/// Path separators, NUL and control characters become `_`. Everything else
/// (dots included) is kept, so distinct catalog IDs map to distinct names.
/// The result is truncated on a char boundary to at most `max_len` bytes.
pub fn sanitize_path_component(id: &str, max_len: usize) -> String {
    let mut out: String = id
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let max_len = max_len.min(NAME_MAX);
    if out.len() > max_len {
        let mut take = max_len;
        while take > 0 && !out.is_char_boundary(take) {
            take -= 1;
        }
        out.truncate(take);
    }
    out
}
