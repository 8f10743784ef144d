use super::model::Station;

/// The stations shipped with the player, in tuning order.
pub fn builtin_stations() -> Vec<Station> {
    vec![
        Station::new(
            "Hello FM 106.4",
            "https://listen.openstream.co/4428/audio",
            "hfm.png",
        ),
        Station::new("Radio City 91.1", "https://prclive1.listenon.in/", "rcfm.png"),
        Station::new(
            "Radio Mirchi 98.3",
            "https://www.liveradio.es/http://radios.crabdance.com:8002/1",
            "rmfm.png",
        ),
        Station::new(
            "Suriyan FM 93.5",
            "https://radios.crabdance.com:8002/2",
            "sfm.png",
        ),
        Station::new(
            "Big FM 92.7",
            "https://www.liveradio.es/http://radios.crabdance.com:8002/4",
            "bigfm.png",
        ),
    ]
}
