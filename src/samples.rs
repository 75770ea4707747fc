/// A built-in demonstration clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub text: &'static str,
}

pub static SAMPLES: [Sample; 3] = [
    Sample {
        name: "Rental Agreement",
        text: "The tenant shall be responsible for all damages to the premises beyond normal wear and tear and shall maintain renter's insurance with a minimum coverage of $100,000 throughout the lease term.",
    },
    Sample {
        name: "Employment Contract",
        text: "The employee agrees to a non-compete clause prohibiting employment with any direct competitors within a 50-mile radius for a period of 12 months following termination.",
    },
    Sample {
        name: "Privacy Policy",
        text: "The company reserves the right to collect, store, and share user data including browsing history and personal information with third-party advertising partners.",
    },
];

/// Look up a sample by name, ignoring ASCII case
pub fn find_sample(name: &str) -> Option<&'static Sample> {
    SAMPLES
        .iter()
        .find(|sample| sample.name.eq_ignore_ascii_case(name.trim()))
}
