use std::collections::HashMap;

use crate::models::Activity;

/// The fixed Mergington High School activity roster. Seeded once at process
/// start; activities are never created or deleted at runtime.
pub fn seed_activities() -> HashMap<String, Activity> {
    let mut activities = HashMap::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    activities.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Competitive basketball training and games",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
        ),
    );
    activities.insert(
        "Swimming Club".to_string(),
        Activity::new(
            "Swimming training and water sports",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
        ),
    );
    activities.insert(
        "Art Studio".to_string(),
        Activity::new(
            "Express creativity through painting and drawing",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Theater arts and performance training",
            "Tuesdays, 4:00 PM - 6:00 PM",
            25,
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Learn public speaking and argumentation skills",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
        ),
    );
    activities.insert(
        "Science Club".to_string(),
        Activity::new(
            "Hands-on experiments and scientific exploration",
            "Fridays, 3:30 PM - 5:00 PM",
            20,
        ),
    );

    activities
}
