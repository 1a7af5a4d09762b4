use std::collections::HashMap;

/// Number of tags kept per platform and period.
pub const TOP_TAG_LIMIT: usize = 10;

/// Counts tags while remembering the order each distinct tag first appeared in.
#[derive(Debug, Default)]
pub struct TagCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl TagCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tag: &str) {
        match self.index.get(tag) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(tag.to_string(), self.entries.len());
                self.entries.push((tag.to_string(), 1));
            }
        }
    }

    pub fn extend<'a, I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for tag in tags {
            self.record(tag);
        }
    }

    pub fn count(&self, tag: &str) -> usize {
        self.index
            .get(tag)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Tags by descending count; equal counts keep first-seen order.
    pub fn ranked(self, limit: usize) -> Vec<String> {
        let mut entries = self.entries;
        // `sort_by` is stable, which is what keeps first-seen order on ties.
        entries.sort_by(|left, right| right.1.cmp(&left.1));
        entries
            .into_iter()
            .take(limit)
            .map(|(tag, _)| tag)
            .collect()
    }
}

/// Ranks an already flattened tag stream.
pub fn rank_top_tags<'a, I>(tags: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = TagCounter::new();
    counter.extend(tags);
    counter.ranked(limit)
}
