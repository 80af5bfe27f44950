use super::content::BlogPost;

pub fn all() -> Vec<BlogPost> {
    vec![
        BlogPost {
            slug: "ship-strikes-preventing-whale-collisions",
            title: "Ship Strikes: Preventing Whale Collisions",
            author: "Moby Labs Team",
            date: "2024-11-20",
            content: SHIP_STRIKES,
        },
        BlogPost {
            slug: "acoustic-detection-technology-explained",
            title: "Acoustic Detection Technology Explained",
            author: "Moby Labs Team",
            date: "2024-11-05",
            content: ACOUSTIC_DETECTION,
        },
        BlogPost {
            slug: "understanding-whale-vocalizations",
            title: "Understanding Whale Vocalizations",
            author: "Moby Labs Team",
            date: "2024-10-22",
            content: VOCALIZATIONS,
        },
        BlogPost {
            slug: "whale-migration-patterns",
            title: "Whale Migration Patterns",
            author: "Moby Labs Team",
            date: "2024-10-08",
            content: MIGRATION,
        },
    ]
}

const SHIP_STRIKES: &str = r#"
Collisions with vessels are one of the leading causes of death for large whales. Most strikes go unreported, because a ship the size of a city block rarely notices the impact.

## Why strikes happen

Whales spend much of their time near the surface to breathe, rest and feed. Shipping lanes often cross the same productive waters they depend on. At speeds above ten knots the chance that a strike is fatal rises sharply.

- Large whales surface slowly and cannot dodge a fast hull
- Bridge crews can rarely see a whale in time, especially at night
- Traffic in major lanes keeps growing every year

## What works

Slowing down is the single most effective measure. Voluntary and mandatory speed zones have cut fatal strikes wherever they are enforced. Rerouting lanes around known feeding grounds helps too.

Both depend on knowing where whales are right now. Seasonal maps are a start, but whales do not follow calendars.

## Real-time detection

Our buoy network listens for whale calls around the clock and reports detections within minutes. Ships receive the alert before they enter the area, which gives crews time to slow down or change course.
"#;

const ACOUSTIC_DETECTION: &str = r#"
Sound travels four times faster in water than in air and carries over enormous distances. That makes listening the most reliable way to find whales that are out of sight.

## Hydrophones

A hydrophone is an underwater microphone. Each Moby Labs buoy carries one, tuned to the low frequency band where most baleen whales call.

## From sound to detection

Raw audio is processed on the buoy itself. A classifier looks at short windows of the spectrogram and scores each one for known call types.

- Background noise from waves and engines is filtered out first
- Candidate calls are matched against species signatures
- Confident detections are sent to shore over a satellite link

## Why on-device processing matters

Sending raw audio would drain the battery in days. Processing locally means each buoy only transmits a few bytes per detection and can stay at sea for months.

## Accuracy

No detector is perfect. We tune for a low false alarm rate so that crews trust the alerts they receive, and every detection carries a confidence score.
"#;

const VOCALIZATIONS: &str = r#"
Whales are some of the most vocal animals on the planet. Their calls range from the deep pulses of blue whales to the complex, evolving songs of humpbacks.

## Songs and calls

Humpback males sing long, structured songs during the breeding season. Other species use shorter calls to keep in touch with their group or to coordinate feeding.

## Frequency ranges

- Blue and fin whales call below 100 Hz, often too low for humans to hear
- Humpback songs span a wide range, from low moans to high cries
- Toothed whales such as orcas use clicks and whistles at much higher frequencies

## What the calls tell us

Each population has its own dialect. By recording calls over time, researchers can tell which groups are present and how they move.

### Listening for conservation

Every call our buoys pick up adds to that record. The same data that protects whales from ships also helps scientists understand them better.
"#;

const MIGRATION: &str = r#"
Many whale species travel thousands of kilometres each year between cold feeding grounds and warm breeding waters. These journeys are among the longest of any mammal.

## Following the food

In summer, whales gather where cold currents bring nutrients to the surface and krill and small fish are plentiful. As winter approaches they head for warmer, calmer waters to give birth.

## Famous routes

- Gray whales travel between Alaska and the lagoons of Baja California
- Humpbacks move between Antarctic waters and the tropics
- North Atlantic right whales migrate along the busy east coast of North America

## Shifting patterns

Warming oceans are moving the prey that whales follow. Routes that held steady for decades are changing, often into areas with heavy ship traffic.

## Tracking in real time

Static maps cannot keep up with these shifts. Continuous acoustic monitoring shows where whales actually are today, not where they were last season.
"#;
