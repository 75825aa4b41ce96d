/// Horizontal rule: three or more `-`, `*` or `_` (one kind per line),
/// optionally separated by spaces or tabs.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_RUN: usize = 3;

    pub fn matches(remainder: &str) -> bool {
        let mut marker = None;
        let mut count = 0usize;

        for b in remainder.bytes() {
            match b {
                b' ' | b'\t' => {}
                m if Self::MARKERS.contains(&m) => {
                    if *marker.get_or_insert(m) != m {
                        return false;
                    }
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_RUN
    }
}
