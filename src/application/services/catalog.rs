//! Static information cards, one row per command

use crate::domain::entities::{Card, Command, CommandAction};

/// Every pre-authored card command. All of them are restricted to the help
/// channel and subject to the cooldown.
pub fn static_commands() -> Vec<Command> {
    vec![
        card_command(
            "date",
            "When the event happens",
            Card::new("📅 Event Date")
                .with_description("Gullhacks runs from **Saturday 9:00 AM** to **Sunday 3:00 PM**.")
                .with_field("Hacking starts", "Saturday 11:00 AM", true)
                .with_field("Hacking ends", "Sunday 11:00 AM", true),
        ),
        card_command(
            "parking",
            "Where to park",
            Card::new("🚗 Parking")
                .with_description("Free parking is available in **Lot B** all weekend.")
                .with_field("Overflow", "Lot D, a short walk from the venue", false)
                .with_field("Permits", "Not required on weekends", false),
        ),
        card_command(
            "food",
            "Meals and snacks",
            Card::new("🍕 Food")
                .with_colour(Card::ORANGE)
                .with_description("All meals are free for registered hackers.")
                .with_field("Saturday", "Breakfast 9 AM, Lunch 12:30 PM, Dinner 6 PM", false)
                .with_field("Sunday", "Midnight snack 12 AM, Breakfast 9 AM", false)
                .with_field("Dietary needs", "Tell an organizer at check-in", false),
        ),
        card_command(
            "location",
            "Where the event is held",
            Card::new("📍 Location")
                .with_description("Guerrieri Academic Commons, Salisbury University.")
                .with_field("Hacking space", "Second floor", true)
                .with_field("Quiet room", "Room 215", true),
        ),
        card_command(
            "schedule",
            "Event schedule",
            Card::new("🗓️ Schedule")
                .with_field("Sat 9:00 AM", "Check-in and breakfast", false)
                .with_field("Sat 10:00 AM", "Opening ceremony", false)
                .with_field("Sat 11:00 AM", "Hacking begins", false)
                .with_field("Sun 11:00 AM", "Hacking ends, submissions due", false)
                .with_field("Sun 12:00 PM", "Judging", false)
                .with_field("Sun 2:00 PM", "Closing ceremony and awards", false),
        ),
        card_command(
            "workshops",
            "Workshop lineup",
            Card::new("🛠️ Workshops")
                .with_colour(Card::PURPLE)
                .with_field("Sat 1:00 PM", "Intro to Git and GitHub", false)
                .with_field("Sat 3:00 PM", "Build a web app in an hour", false)
                .with_field("Sat 8:00 PM", "Pitching your project", false),
        ),
        card_command(
            "categories",
            "Prize categories",
            Card::new("🏆 Prize Categories")
                .with_colour(Card::GOLD)
                .with_field("Best Overall", "Top project across all tracks", false)
                .with_field("Best Beginner Hack", "All team members are first-time hackers", false)
                .with_field("Best Social Good", "Projects that help the community", false)
                .with_field("Best Design", "Outstanding user experience", false),
        ),
        card_command(
            "submission",
            "How to submit a project",
            Card::new("📤 Submission")
                .with_description("Submit on Devpost before **Sunday 11:00 AM**.")
                .with_field("Include", "Project description, demo video, repository link", false)
                .with_field("Teams", "Up to 4 members, one submission per team", false),
        ),
        card_command(
            "faq",
            "Frequently asked questions",
            Card::new("❓ FAQ")
                .with_field("Who can attend?", "Any student 18 or older", false)
                .with_field("Does it cost anything?", "No, it's free", false)
                .with_field("Do I need a team?", "No, we hold team formation at the opening ceremony", false)
                .with_field("Anything else?", "Try `!ask` followed by your question", false),
        ),
        card_command(
            "sponsors",
            "Event sponsors",
            Card::new("🤝 Sponsors")
                .with_colour(Card::GREEN)
                .with_description("Gullhacks is made possible by our sponsors. Visit their tables in the main hall!"),
        ),
        card_command(
            "checkin",
            "Check-in details",
            Card::new("✅ Check-in")
                .with_colour(Card::GREEN)
                .with_description("Check in at the front desk Saturday from 9:00 AM.")
                .with_field("Bring", "Student ID and your registration QR code", false),
        ),
        card_command(
            "troll",
            "Don't",
            Card::new("🧌 Nice try")
                .with_colour(Card::RED)
                .with_description("Go back to hacking."),
        ),
        card_command(
            "info",
            "What this bot can help with",
            Card::new("Welcome to Gullhacks!")
                .with_colour(Card::GREEN)
                .with_description("Here's what I can help you with:")
                .with_field("Parking", "`!ask parking`", true)
                .with_field("Food", "`!ask food`", true)
                .with_field("WiFi", "`!ask wifi`", true)
                .with_field("Schedule", "`!ask schedule`", true)
                .with_field("Submissions", "`!ask submit`", true)
                .with_field("Help", "`!ask help`", true)
                .with_footer("Type !ask followed by your question!"),
        ),
    ]
}

fn card_command(name: &str, description: &str, card: Card) -> Command {
    Command::new(name, CommandAction::Static(card)).with_description(description)
}
