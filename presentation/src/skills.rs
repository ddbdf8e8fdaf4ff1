use colored::Colorize;

struct SkillGroup {
    name: &'static str,
    skills: &'static [&'static str],
}

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Data Engineering",
        skills: &[
            "SAP HANA",
            "Oracle",
            "AWS",
            "MySQL",
            "ETL/ELT",
            "Data Warehousing",
            "OLAP/OLTP",
        ],
    },
    SkillGroup {
        name: "Visualization",
        skills: &[
            "Power BI",
            "Tableau",
            "DAX",
            "Excel Dashboards",
            "Interactive Reports",
        ],
    },
    SkillGroup {
        name: "Python & AI/ML",
        skills: &[
            "pandas",
            "scikit-learn",
            "TensorFlow",
            "PyTorch",
            "NLP",
            "Time Series",
            "Flask/FastAPI",
        ],
    },
    SkillGroup {
        name: "Automation & Integration",
        skills: &[
            "Python Scripts",
            "Power Automate",
            "REST APIs",
            "Workflow Automation",
            "CI/CD",
        ],
    },
];

const INDUSTRIES: &str =
    "FMCG • Retail • Manufacturing • Finance • Production • B2B • HRM • CRM • MIS";
const MODULES: &str = "Sales • Inventory • Finance • Vendor • Manufacturing • HR • \
                       System Integration • Marketing • Procurement";

pub fn render() {
    println!("{}", "Core Skills & Technologies".bold());
    println!(
        "{}",
        "A comprehensive toolkit for building intelligent data solutions".dimmed()
    );
    println!();
    for group in SKILL_GROUPS {
        println!("{}", group.name.cyan().bold());
        println!("  {}", group.skills.join(" | "));
        println!();
    }
    println!("{} {}", "Industries:".bold(), INDUSTRIES);
    println!("{} {}", "Modules:".bold(), MODULES);
}
