use super::model::{Album, Track};

fn sample(title: &str, artist: &str, album: &str, image: &str, file: &str) -> Track {
    Track {
        title: title.to_string(),
        artist: artist.to_string(),
        album: Album {
            name: album.to_string(),
            image: Some(image.to_string()),
        },
        file: file.to_string(),
    }
}

/// Playlist used when the player is built without any tracks.
pub fn sample_tracks() -> Vec<Track> {
    vec![
        sample(
            "Amazing",
            "Kanye West",
            "808s & Heartbreak",
            "kanye-west-808s-heartbreaks.jpg",
            "audio/Xenojam_-_02_-_Inevitable.mp3",
        ),
        sample(
            "Gold",
            "Imagine Dragons",
            "Smoke + Mirrors",
            "imagine-dragons-smoke-mirrors.jpg",
            "audio/Water_Features_-_07_-_Outisde_The_Citadel.mp3",
        ),
        sample(
            "The Phoenix",
            "Fall Out Boy",
            "Save Rock And Roll",
            "fall-out-boy-save-rock-and-roll.jpg",
            "audio/Visciera_-_02_-_The_Tide.mp3",
        ),
    ]
}
