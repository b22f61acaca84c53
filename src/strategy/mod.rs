//! Report generation strategies
//!
//! Two interchangeable ways of turning a JSON array of transactions into a
//! [`Report`]:
//!
//! - [`Generator::Bulk`] buffers the whole input and decodes it in one go
//! - [`Generator::Stream`] decodes and folds one element at a time
//!
//! Both produce identical reports for the same well-formed input. The set of
//! strategies is closed, so selection is a plain enum rather than a trait
//! object.

use crate::types::{Report, ReportError};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

pub mod bulk;
pub mod stream;

/// Available report generation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Load the entire source, then decode (selected by `naive` or `bulk`)
    Bulk,
    /// Decode incrementally (selected by `stream`)
    Stream,
}

impl Generator {
    /// All strategies, in the order they are listed in help output
    pub const ALL: [Generator; 2] = [Generator::Bulk, Generator::Stream];

    /// Read `source` to completion and aggregate it into a report
    ///
    /// The source is borrowed for the duration of the call only. No report is
    /// returned when reading or decoding fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_report_engine::strategy::create_generator;
    ///
    /// let input = r#"[{"user_id": 1, "amount": 5, "category": "food"}]"#;
    /// let report = create_generator("stream").unwrap().generate(input.as_bytes()).unwrap();
    ///
    /// assert_eq!(report.get(1).unwrap()["category_food"], 5);
    /// ```
    pub fn generate<R: Read>(&self, source: R) -> Result<Report, ReportError> {
        match self {
            Generator::Bulk => bulk::generate(source),
            Generator::Stream => stream::generate(source),
        }
    }

    /// Canonical selector name
    pub fn name(&self) -> &'static str {
        match self {
            Generator::Bulk => "naive",
            Generator::Stream => "stream",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = ReportError;

    fn from_str(algorithm: &str) -> Result<Self, Self::Err> {
        match algorithm {
            "naive" | "bulk" => Ok(Generator::Bulk),
            "stream" => Ok(Generator::Stream),
            _ => Err(ReportError::unknown_strategy(algorithm)),
        }
    }
}

/// Create a report generator from its selector name
///
/// # Arguments
///
/// * `algorithm` - `"naive"` or `"bulk"` for [`Generator::Bulk`], `"stream"`
///   for [`Generator::Stream`]
///
/// # Errors
///
/// Returns `UnknownStrategy` naming `algorithm` for any other value.
pub fn create_generator(algorithm: &str) -> Result<Generator, ReportError> {
    algorithm.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::naive("naive", Generator::Bulk)]
    #[case::bulk("bulk", Generator::Bulk)]
    #[case::stream("stream", Generator::Stream)]
    fn test_create_generator(#[case] algorithm: &str, #[case] expected: Generator) {
        assert_eq!(create_generator(algorithm).unwrap(), expected);
    }

    #[rstest]
    #[case::garbage("aaaaaa")]
    #[case::empty("")]
    #[case::wrong_case("Stream")]
    fn test_create_generator_unknown(#[case] algorithm: &str) {
        let err = create_generator(algorithm).unwrap_err();
        assert_eq!(err, ReportError::unknown_strategy(algorithm));
    }

    #[test]
    fn test_name_round_trips_through_factory() {
        for generator in Generator::ALL {
            assert_eq!(create_generator(generator.name()).unwrap(), generator);
            assert_eq!(generator.to_string(), generator.name());
        }
    }

    #[rstest]
    #[case::single_user(
        r#"[{"user_id":10,"amount":10,"category":"aa"},{"user_id":10,"amount":20,"category":"aa"},{"user_id":10,"amount":40,"category":"bb"}]"#
    )]
    #[case::multiple_users(
        r#"[{"user_id":10,"amount":10,"category":"aa"},{"user_id":10,"amount":20,"category":"aa"},
            {"user_id":11,"amount":30,"category":"bb"},{"user_id":11,"amount":40,"category":"bb"}]"#
    )]
    #[case::defaults_and_extras(
        r#" [ {"user_id":1}, {"amount":5}, {"user_id":2,"amount":-3,"category":null,"note":"x"} ] "#
    )]
    #[case::repeated_keys(
        r#"[{"user_id":1,"amount":2,"amount":3,"category":"a","category":"b"}]"#
    )]
    #[case::empty("[]")]
    fn test_strategies_produce_identical_reports(#[case] input: &str) {
        let bulk = Generator::Bulk.generate(input.as_bytes()).unwrap();
        let stream = Generator::Stream.generate(input.as_bytes()).unwrap();
        assert_eq!(bulk, stream);
    }

    #[rstest]
    #[case::object(r#"{"user_id": 10, "amount": 10}"#)]
    #[case::missing_close(r#"[{"user_id": 10, "amount": 10}"#)]
    #[case::malformed_element(r#"[{"user_id": 10, "amount": true}]"#)]
    #[case::array_element(r#"[[10,5,"aa"]]"#)]
    #[case::empty("")]
    fn test_strategies_reject_malformed_input(#[case] input: &str) {
        for generator in Generator::ALL {
            let err = generator.generate(input.as_bytes()).unwrap_err();
            assert!(err.is_input_error(), "{} returned {:?}", generator, err);
        }
    }

    #[test]
    fn test_strategies_last_repeated_key_wins() {
        let input = r#"[{"user_id":1,"amount":2,"amount":3}]"#;
        for generator in Generator::ALL {
            let report = generator.generate(input.as_bytes()).unwrap();
            assert_eq!(report.get(1).unwrap()["sum"], 3, "{}", generator);
        }
    }

    /// Hands out `data` in small chunks, then fails
    #[derive(Debug)]
    struct InterruptedReader {
        data: &'static [u8],
    }

    impl Read for InterruptedReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.data.is_empty() {
                return Err(std::io::Error::other("connection reset"));
            }
            let n = self.data.len().min(buf.len()).min(8);
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[rstest]
    #[case::inside_element(r#"[{"user_id": 1, "amo"#)]
    #[case::between_elements(r#"[{"user_id": 1, "amount": 2},"#)]
    #[case::before_array("  ")]
    fn test_strategies_report_read_failure(#[case] data: &'static str) {
        for generator in Generator::ALL {
            let reader = InterruptedReader {
                data: data.as_bytes(),
            };
            let err = generator.generate(reader).unwrap_err();
            assert!(
                matches!(err, ReportError::ReadError { .. }),
                "{} returned {:?}",
                generator,
                err
            );
        }
    }
}
