use serde::Serialize;

/// One topic a visitor can pick, with its scripted follow-up questions.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub label: &'static str,
    pub questions: [&'static str; 3],
}

const SCRIPT: &[CategoryEntry] = &[
    CategoryEntry {
        label: "DATA ANALYST",
        questions: [
            "What tools do you use for data analysis?",
            "Can you help with data visualization?",
            "Do you work with SQL and Python?",
        ],
    },
    CategoryEntry {
        label: "BUSINESS INTELLIGENCE",
        questions: [
            "Do you create Power BI dashboards?",
            "Can you help with SAP HANA integration?",
            "What BI tools do you specialize in?",
        ],
    },
    CategoryEntry {
        label: "AI/ML",
        questions: [
            "What ML frameworks do you work with?",
            "Can you build predictive models?",
            "Do you offer AI consulting services?",
        ],
    },
    CategoryEntry {
        label: "WEB DESIGNING",
        questions: [
            "Do you build responsive websites?",
            "Can you develop dynamic web applications?",
            "What technologies do you use?",
        ],
    },
    CategoryEntry {
        label: "AUTOMATION",
        questions: [
            "What processes can you automate?",
            "Do you work with RPA tools?",
            "Can you automate business workflows?",
        ],
    },
    CategoryEntry {
        label: "DATA MANAGEMENT",
        questions: [
            "Do you offer database design services?",
            "Can you help with ETL processes?",
            "What data warehousing solutions do you provide?",
        ],
    },
];

/// Immutable lookup table from category label to its fixed question list.
/// Built once at startup and handed to each conversation; never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [CategoryEntry],
}

impl Default for Catalog {
    fn default() -> Self {
        Self { entries: SCRIPT }
    }
}

impl Catalog {
    pub fn entries(&self) -> &'static [CategoryEntry] {
        self.entries
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.label).collect()
    }

    pub fn entry(&self, label: &str) -> Option<&'static CategoryEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn questions_for(&self, label: &str) -> Option<&'static [&'static str]> {
        self.entry(label).map(|e| &e.questions[..])
    }
}
