//! # Sequence Length Policy

/// Truncate `ids` to `len` entries, or right-pad them with `pad` up to `len`.
///
/// Truncation drops trailing entries, including a trailing eos.
pub fn fit_to_length<T: Copy>(
    ids: &mut Vec<T>,
    len: usize,
    pad: T,
) {
    ids.truncate(len);
    ids.resize(len, pad);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_length() {
        let mut ids = vec![0u32, 4, 5, 1];
        fit_to_length(&mut ids, 6, 2);
        assert_eq!(ids, vec![0, 4, 5, 1, 2, 2]);

        fit_to_length(&mut ids, 3, 2);
        assert_eq!(ids, vec![0, 4, 5]);

        fit_to_length(&mut ids, 3, 2);
        assert_eq!(ids, vec![0, 4, 5]);

        fit_to_length(&mut ids, 0, 2);
        assert!(ids.is_empty());
    }
}
