use colored::Colorize;

struct ContactChannel {
    label: &'static str,
    value: &'static str,
    link: &'static str,
}

const CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "your.email@example.com",
        link: "mailto:your.email@example.com",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "linkedin.com/in/yourprofile",
        link: "https://linkedin.com/in/yourprofile",
    },
    ContactChannel {
        label: "Portfolio",
        value: "yourwebsite.com",
        link: "https://yourwebsite.com",
    },
    ContactChannel {
        label: "Phone",
        value: "+91-XXXX-XXXXXX",
        link: "tel:+91XXXXXXXXXX",
    },
];

const TAGLINE: &str = "From Raw Data to Intelligent Automation";

pub fn render() {
    println!("{}", "Let's Connect".bold());
    println!(
        "{}",
        "Ready to collaborate on data engineering, AI/ML, automation, or analytics projects"
            .dimmed()
    );
    println!();
    for channel in CHANNELS {
        println!(
            "{:<10} {}  {}",
            channel.label.cyan().bold(),
            channel.value,
            format!("({})", channel.link).dimmed()
        );
    }
    println!();
    println!("{}", format!("\"{TAGLINE}\"").italic());
    println!(
        "{}",
        "Building smart data systems with AI and engineering excellence".dimmed()
    );
}
