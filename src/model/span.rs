//! Suspect-span duration arithmetic.
//!
//! Pure reductions over span example lists, kept separate from the
//! thread/exception resolution logic. All outputs are in milliseconds;
//! example timestamps arrive in seconds from the ingestion side and are
//! converted here exactly once.

/// Single span occurrence within a transaction example.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Span identifier.
    pub id: String,
    /// Exclusive time of this occurrence, in milliseconds.
    pub exclusive_time_ms: f64,
}

/// Example transaction exhibiting a suspect span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanExample {
    /// Event identifier of the example transaction.
    pub id: String,
    /// Transaction start, in seconds.
    pub start_timestamp: f64,
    /// Transaction finish, in seconds.
    pub finish_timestamp: f64,
    /// Exclusive time with overlaps between occurrences removed, in
    /// milliseconds.
    pub non_overlapping_exclusive_time_ms: f64,
    /// Occurrences of the suspect span within this transaction.
    pub spans: Vec<Span>,
}

impl SpanExample {
    /// Finish timestamp in milliseconds.
    pub fn finish_timestamp_ms(&self) -> f64 {
        self.finish_timestamp * 1000.0
    }

    /// Total transaction duration in milliseconds.
    pub fn transaction_duration_ms(&self) -> f64 {
        (self.finish_timestamp - self.start_timestamp) * 1000.0
    }

    /// Number of occurrences of the span in this transaction.
    pub fn repeated(&self) -> usize {
        self.spans.len()
    }

    /// Cumulative duration: sum of per-occurrence exclusive time, in
    /// milliseconds. Overlaps are counted multiply, by definition.
    pub fn cumulative_duration_ms(&self) -> f64 {
        self.spans
            .iter()
            .fold(0.0, |duration, span| duration + span.exclusive_time_ms)
    }

    /// Occurrence with the largest exclusive time; the earliest wins ties.
    ///
    /// `None` when the example carries no occurrences.
    pub fn worst_span(&self) -> Option<&Span> {
        self.spans.iter().reduce(|worst, span| {
            if worst.exclusive_time_ms >= span.exclusive_time_ms {
                worst
            } else {
                span
            }
        })
    }

    /// Fraction of the transaction occupied by the span's non-overlapping
    /// exclusive time.
    ///
    /// `None` when the transaction duration is zero, which callers render
    /// as an empty bar rather than dividing by zero.
    pub fn occupied_fraction(&self) -> Option<f64> {
        let transaction = self.transaction_duration_ms();
        if transaction == 0.0 {
            return None;
        }
        Some(self.non_overlapping_exclusive_time_ms / transaction)
    }
}
