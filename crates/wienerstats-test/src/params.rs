//! Regression test parameters and operations

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "stats")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "stats")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two accumulator values for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the values are equal, `false` otherwise.
    pub fn compare_i64(&mut self, expected: i64, actual: i64) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two lengths or indices for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the values are equal, `false` otherwise.
    pub fn compare_usize(&mut self, expected: usize, actual: usize) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: size comparison for index {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two accumulator arrays for exact equality
    ///
    /// Reports the first mismatching entry only.
    ///
    /// # Arguments
    ///
    /// * `label` - Context for the failure message (e.g., "win 7 bd 10 H")
    /// * `expected` - Expected entries
    /// * `actual` - Actual entries
    ///
    /// # Returns
    ///
    /// `true` if lengths and all entries match, `false` otherwise.
    pub fn compare_slices(&mut self, label: &str, expected: &[i64], actual: &[i64]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: {} comparison for index {} - length {} vs {}",
                self.test_name,
                label,
                self.index,
                expected.len(),
                actual.len()
            );
            self.fail(msg);
            return false;
        }

        match expected.iter().zip(actual).position(|(e, a)| e != a) {
            Some(i) => {
                let msg = format!(
                    "Failure in {}_reg: {} comparison for index {} - [{:4}] expected {} actual {}",
                    self.test_name, label, self.index, i, expected[i], actual[i]
                );
                self.fail(msg);
                false
            }
            None => true,
        }
    }

    /// Record a boolean check
    ///
    /// # Returns
    ///
    /// `cond`, unchanged.
    pub fn check(&mut self, label: &str, cond: bool) -> bool {
        self.index += 1;

        if !cond {
            let msg = format!(
                "Failure in {}_reg: check '{}' for index {}",
                self.test_name, label, self.index
            );
            self.fail(msg);
        }
        cond
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
