//! Unit tests for rt-network.
//!
//! The `westeros` fixture mirrors a hand-checked 14-stop network with six
//! lines; every expected cost is a shortest Manhattan path along the lines.

#[cfg(test)]
mod helpers {
    use rt_core::StopId;

    use crate::StopNetwork;

    /// Named handles into the Westeros fixture.
    pub struct Westeros {
        pub castle_black:  StopId,
        pub winterfell:    StopId,
        pub harrenhal:     StopId,
        pub kings_landing: StopId,
        pub kingswood:     StopId,
        pub highgarden:    StopId,
        pub horn_hill:     StopId,
        pub dragonstone:   StopId,
        pub storms_end:    StopId,
        pub riverrun:      StopId,
        pub casterly_rock: StopId,
        pub lannisport:    StopId,
        pub eastwatch:     StopId,
        pub braavos:       StopId,
    }

    pub fn westeros() -> (StopNetwork, Westeros) {
        let mut net = StopNetwork::new();
        let mut add = |name: &str, x, y| net.add_stop(name, x, y).unwrap();

        let w = Westeros {
            castle_black:  add("Castle Black", 0, 14),
            winterfell:    add("Winterfell", 0, 13),
            harrenhal:     add("Harrenhal", 0, 3),
            kings_landing: add("Kings Landing", 0, 0),
            kingswood:     add("Kingswood", 0, -1),
            highgarden:    add("Highgarden", 0, -4),
            horn_hill:     add("Horn Hill", 0, -5),
            dragonstone:   add("Dragonstone", 3, 3),
            storms_end:    add("Storms End", 3, 0),
            riverrun:      add("Riverrun", -1, 3),
            casterly_rock: add("Casterly Rock", -4, 0),
            lannisport:    add("Lannisport", -4, -1),
            eastwatch:     add("Eastwatch-by-the-Sea", 1, 14),
            braavos:       add("Braavos", 8, 8),
        };

        // Kingsroad, Gold Road, Roseroad, River Road, the Narrow Sea, the Wall.
        net.link_line(&[w.castle_black, w.winterfell, w.harrenhal, w.kings_landing]).unwrap();
        net.link_line(&[w.casterly_rock, w.kings_landing, w.storms_end]).unwrap();
        net.link_line(&[w.kings_landing, w.kingswood, w.highgarden, w.horn_hill]).unwrap();
        net.link_line(&[w.lannisport, w.casterly_rock, w.riverrun, w.harrenhal]).unwrap();
        net.link_line(&[w.winterfell, w.dragonstone, w.kings_landing]).unwrap();
        net.link_line(&[w.castle_black, w.eastwatch]).unwrap();

        (net, w)
    }
}

// ── Stop identity and text form ───────────────────────────────────────────────

#[cfg(test)]
mod stop {
    use rt_core::{GridPoint, RtError};

    use crate::{NetworkError, StopKey};

    #[test]
    fn accessors() {
        let key = StopKey::new("Alpha", 1, -2).unwrap();
        assert_eq!(key.name(), "Alpha");
        assert_eq!(key.x(), 1);
        assert_eq!(key.y(), -2);
        assert_eq!(key.position(), GridPoint::new(1, -2));
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(StopKey::new("", 0, 0), Err(NetworkError::EmptyName)));
        assert!(matches!(StopKey::new("\r\n", 0, 0), Err(NetworkError::EmptyName)));
    }

    #[test]
    fn line_breaks_stripped_from_name() {
        let key = StopKey::new("Contains\rExtra\nCharacters", 0, 0).unwrap();
        assert_eq!(key.name(), "ContainsExtraCharacters");
    }

    #[test]
    fn delimiter_in_name_rejected() {
        let err = StopKey::new("Al:pha", 1, 2).unwrap_err();
        assert!(matches!(err, NetworkError::DelimiterInName(ref n) if n == "Al:pha"));
        assert!(matches!(StopKey::new(":", 0, 0), Err(NetworkError::DelimiterInName(_))));
    }

    #[test]
    fn text_form_round_trips() {
        for (name, x, y) in [("Alpha", 0, 0), ("  ", -3, 7), ("Eastwatch-by-the-Sea", i32::MIN, i32::MAX)] {
            let key = StopKey::new(name, x, y).unwrap();
            assert_eq!(key.to_string().parse::<StopKey>().unwrap(), key);
        }
    }

    #[test]
    fn whitespace_name_allowed() {
        assert_eq!(StopKey::new("  ", 0, 0).unwrap().name(), "  ");
    }

    #[test]
    fn equality_is_name_and_position() {
        let alpha = StopKey::new("Alpha", 0, 0).unwrap();
        assert_eq!(alpha, StopKey::new("Alpha", 0, 0).unwrap());
        assert_ne!(alpha, StopKey::new("Beta", 0, 0).unwrap());
        assert_ne!(alpha, StopKey::new("Alpha", 0, 4).unwrap());
        assert_ne!(alpha, StopKey::new("Alpha", 2, 0).unwrap());
    }

    #[test]
    fn display_form() {
        assert_eq!(StopKey::new("Alpha", 0, 0).unwrap().to_string(), "Alpha:0:0");
        assert_eq!(StopKey::new("Delta", 2, -4).unwrap().to_string(), "Delta:2:-4");
    }

    #[test]
    fn parse() {
        let key: StopKey = "Alpha:1:2".parse().unwrap();
        assert_eq!(key, StopKey::new("Alpha", 1, 2).unwrap());

        let padded: StopKey = "City: 23 :-5".parse().unwrap();
        assert_eq!(padded.x(), 23);
        assert_eq!(padded.y(), -5);
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "Alp:ha:1:2", "Alpha:1:", "Alpha:1", "Alpha:a:2", "Alpha:1:a", "Alpha:1.5:2"] {
            let err = bad.parse::<StopKey>().unwrap_err();
            assert!(
                matches!(err, NetworkError::Core(RtError::Parse(_))),
                "`{bad}` gave {err:?}"
            );
        }
        assert!(matches!(":1:2".parse::<StopKey>(), Err(NetworkError::EmptyName)));
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arena {
    use rt_core::{RtError, StopId};

    use crate::{NetworkError, StopKey, StopNetwork};

    #[test]
    fn sequential_ids() {
        let mut net = StopNetwork::new();
        assert!(net.is_empty());
        assert_eq!(net.add_stop("A", 0, 0).unwrap(), StopId(0));
        assert_eq!(net.add_stop("B", 0, 1).unwrap(), StopId(1));
        assert_eq!(net.len(), 2);
        assert_eq!(net.stop(StopId(1)).unwrap().name(), "B");
    }

    #[test]
    fn duplicate_rejected() {
        let mut net = StopNetwork::new();
        net.add_stop("UQ Lakes", 0, 0).unwrap();
        let err = net.add_stop("UQ Lakes", 0, 0).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateStop(ref s) if s == "UQ Lakes:0:0"));
        // Same name elsewhere is a different stop.
        assert!(net.add_stop("UQ Lakes", 2, 2).is_ok());
    }

    #[test]
    fn resolve_by_value() {
        let mut net = StopNetwork::new();
        let id = net.add_stop("Alpha", 3, 4).unwrap();
        let copy = StopKey::new("Alpha", 3, 4).unwrap();
        assert_eq!(net.resolve(&copy), Some(id));
        assert_eq!(net.resolve(&StopKey::new("Alpha", 4, 3).unwrap()), None);
        assert_eq!(net.stop(id).unwrap().key(), &copy);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut net = StopNetwork::new();
        let a = net.add_stop("A", 0, 0).unwrap();
        let ghost = StopId(9);
        assert!(net.get(ghost).is_none());
        assert!(matches!(net.stop(ghost), Err(NetworkError::Core(RtError::StopNotFound(id))) if id == ghost));
        assert!(net.add_neighbour(a, ghost).is_err());
        assert!(net.cost_between(a, ghost).is_err());
        assert!(net.next_hop(ghost, a).is_err());
        assert!(net.link_line(&[a, ghost]).is_err());
        // Nothing was linked by the failed call.
        assert!(net.stop(a).unwrap().neighbours().is_empty());
    }

    #[test]
    fn stops_compare_by_value() {
        let mut one = StopNetwork::new();
        let mut two = StopNetwork::new();
        one.add_stop("Padding", 9, 9).unwrap();
        let a = one.add_stop("Alpha", 0, 0).unwrap();
        let b = two.add_stop("Alpha", 0, 0).unwrap();
        assert_ne!(a, b);
        assert_eq!(one.stop(a).unwrap(), two.stop(b).unwrap());
        assert_eq!(one.stop(a).unwrap().to_string(), "Alpha:0:0");
    }

    #[test]
    fn distance_to() {
        let mut net = StopNetwork::new();
        let alpha = net.add_stop("Alpha", 0, 0).unwrap();
        let gamma = net.add_stop("Gamma", 0, 4).unwrap();
        let delta = net.add_stop("Delta", 2, -4).unwrap();
        let stop = |id| net.stop(id).unwrap();
        assert_eq!(stop(alpha).distance_to(stop(gamma)), 4);
        assert_eq!(stop(alpha).distance_to(stop(delta)), 6);
    }

    #[test]
    fn network_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StopNetwork>();
    }

    #[test]
    fn extreme_coordinates_stay_routable() {
        let mut net = StopNetwork::new();
        let a = net.add_stop("West", i32::MIN, 0).unwrap();
        let b = net.add_stop("East", i32::MAX, 0).unwrap();
        let c = net.add_stop("East Rise", i32::MAX, 1).unwrap();
        net.connect(a, b).unwrap();
        net.connect(b, c).unwrap();

        let span = u64::from(u32::MAX);
        assert_eq!(net.cost_between(a, b).unwrap(), span);
        assert_eq!(net.cost_between(a, c).unwrap(), span + 1);
        assert_eq!(net.next_hop(a, c).unwrap(), Some(b));
        assert_eq!(net.cost_between(c, a).unwrap(), span + 1);
    }

    #[test]
    fn repeated_neighbour_is_not_duplicated() {
        let mut net = StopNetwork::new();
        let a = net.add_stop("Alpha", 0, 0).unwrap();
        let b = net.add_stop("Beta", 0, 0).unwrap();
        net.add_neighbour(a, b).unwrap();
        let report = net.add_neighbour(a, b).unwrap();
        assert!(report.is_quiescent());
        assert_eq!(net.stop(a).unwrap().neighbours(), &[b]);
    }
}

// ── Routing on the Westeros fixture ───────────────────────────────────────────

#[cfg(test)]
mod westeros {
    use rt_core::INFINITE;

    use super::helpers::westeros;

    #[test]
    fn costs_from_kings_landing() {
        let (net, w) = westeros();
        let cost = |to| net.cost_between(w.kings_landing, to).unwrap();
        assert_eq!(cost(w.kings_landing), 0);
        assert_eq!(cost(w.harrenhal), 3);
        assert_eq!(cost(w.riverrun), 4);
        assert_eq!(cost(w.casterly_rock), 4);
        assert_eq!(cost(w.lannisport), 5);
        assert_eq!(cost(w.storms_end), 3);
        assert_eq!(cost(w.dragonstone), 6);
        assert_eq!(cost(w.winterfell), 13);
        assert_eq!(cost(w.castle_black), 14);
        assert_eq!(cost(w.eastwatch), 15);
        assert_eq!(cost(w.kingswood), 1);
        assert_eq!(cost(w.highgarden), 4);
        assert_eq!(cost(w.horn_hill), 5);
        assert_eq!(cost(w.braavos), INFINITE);
    }

    #[test]
    fn costs_snapshot() {
        let (net, w) = westeros();
        let costs = net.routing_table(w.kings_landing).unwrap().costs();
        assert_eq!(costs.len(), 13);
        assert!(!costs.contains_key(&w.braavos));
        assert_eq!(costs[&w.eastwatch], 15);
        assert_eq!(costs[&w.kings_landing], 0);
    }

    #[test]
    fn next_hops_from_kings_landing() {
        let (net, w) = westeros();
        let next = |to| net.next_hop(w.kings_landing, to).unwrap();
        assert_eq!(next(w.kings_landing), Some(w.kings_landing));
        assert_eq!(next(w.winterfell), Some(w.harrenhal));
        assert_eq!(next(w.castle_black), Some(w.harrenhal));
        assert_eq!(next(w.eastwatch), Some(w.harrenhal));
        assert_eq!(next(w.harrenhal), Some(w.harrenhal));
        assert_eq!(next(w.dragonstone), Some(w.dragonstone));
        assert_eq!(next(w.storms_end), Some(w.storms_end));
        assert_eq!(next(w.riverrun), Some(w.harrenhal));
        assert_eq!(next(w.casterly_rock), Some(w.casterly_rock));
        assert_eq!(next(w.lannisport), Some(w.casterly_rock));
        assert_eq!(next(w.kingswood), Some(w.kingswood));
        assert_eq!(next(w.highgarden), Some(w.kingswood));
        assert_eq!(next(w.horn_hill), Some(w.kingswood));
        assert_eq!(next(w.braavos), None);
    }

    #[test]
    fn reachable_in_depth_first_order() {
        let (net, w) = westeros();
        let expected = vec![
            w.kings_landing,
            w.dragonstone,
            w.winterfell,
            w.harrenhal,
            w.riverrun,
            w.casterly_rock,
            w.lannisport,
            w.castle_black,
            w.eastwatch,
            w.kingswood,
            w.highgarden,
            w.horn_hill,
            w.storms_end,
        ];
        assert_eq!(net.reachable_stops(w.kings_landing).unwrap(), expected);
        assert_eq!(net.reachable_stops(w.braavos).unwrap(), vec![w.braavos]);
    }

    #[test]
    fn transfer_needs_direct_adjacency() {
        let (mut net, w) = westeros();
        // Not a neighbour at all.
        assert!(!net.transfer_entries(w.kings_landing, w.braavos).unwrap());
        // A neighbour, but the network is already converged.
        assert!(!net.transfer_entries(w.kings_landing, w.dragonstone).unwrap());
    }

    #[test]
    fn one_way_shortcut() {
        let (mut net, w) = westeros();
        assert_eq!(net.next_hop(w.lannisport, w.highgarden).unwrap(), Some(w.casterly_rock));
        assert_eq!(net.cost_between(w.lannisport, w.highgarden).unwrap(), 9);
        assert_eq!(net.cost_between(w.highgarden, w.lannisport).unwrap(), 9);

        net.add_neighbour(w.lannisport, w.highgarden).unwrap();

        assert_eq!(net.next_hop(w.lannisport, w.highgarden).unwrap(), Some(w.highgarden));
        assert_eq!(net.cost_between(w.lannisport, w.highgarden).unwrap(), 7);
        assert_eq!(net.cost_between(w.highgarden, w.lannisport).unwrap(), 7);
        // The improvement spreads past the shortcut's endpoints.
        assert_eq!(net.cost_between(w.horn_hill, w.lannisport).unwrap(), 8);
        assert_eq!(net.next_hop(w.horn_hill, w.lannisport).unwrap(), Some(w.highgarden));
    }

    #[test]
    fn two_way_shortcut() {
        let (mut net, w) = westeros();
        assert_eq!(net.next_hop(w.dragonstone, w.harrenhal).unwrap(), Some(w.kings_landing));
        assert_eq!(net.cost_between(w.dragonstone, w.harrenhal).unwrap(), 9);
        assert_eq!(net.cost_between(w.harrenhal, w.dragonstone).unwrap(), 9);
        assert_eq!(net.next_hop(w.dragonstone, w.riverrun).unwrap(), Some(w.kings_landing));
        assert_eq!(net.cost_between(w.dragonstone, w.riverrun).unwrap(), 10);
        assert_eq!(net.cost_between(w.riverrun, w.dragonstone).unwrap(), 10);

        net.add_neighbour(w.dragonstone, w.harrenhal).unwrap();
        net.add_neighbour(w.harrenhal, w.dragonstone).unwrap();

        assert_eq!(net.next_hop(w.dragonstone, w.harrenhal).unwrap(), Some(w.harrenhal));
        assert_eq!(net.cost_between(w.dragonstone, w.harrenhal).unwrap(), 3);
        assert_eq!(net.cost_between(w.harrenhal, w.dragonstone).unwrap(), 3);
        assert_eq!(net.next_hop(w.dragonstone, w.riverrun).unwrap(), Some(w.harrenhal));
        assert_eq!(net.cost_between(w.dragonstone, w.riverrun).unwrap(), 4);
        assert_eq!(net.cost_between(w.riverrun, w.dragonstone).unwrap(), 4);
    }

    #[test]
    fn resynchronising_changes_nothing() {
        let (mut net, w) = westeros();
        let before = net.routing_snapshot();
        let report = net.synchronise(w.kings_landing).unwrap();
        assert!(report.is_quiescent());
        assert_eq!(report.sweeps, 1);
        assert_eq!(net.routing_snapshot(), before);
    }

    #[test]
    fn self_entries_hold() {
        let (net, _) = westeros();
        for stop in net.stops() {
            let table = stop.routing_table();
            assert_eq!(table.home(), stop.id());
            assert_eq!(table.cost_to(stop.id()), 0);
            assert_eq!(table.next_hop(stop.id()), Some(stop.id()));
        }
    }

    #[test]
    fn snapshot_rows() {
        let (net, w) = westeros();
        let rows = net.routing_snapshot();
        // 13 connected stops know each other; Braavos only knows itself.
        assert_eq!(rows.len(), 13 * 13 + 1);
        assert!(rows.windows(2).all(|p| p[0] < p[1]));
        let kl_to_cb = rows
            .iter()
            .find(|r| r.from == w.kings_landing.0 && r.to == w.castle_black.0)
            .unwrap();
        assert_eq!(kl_to_cb.cost, 14);
        assert_eq!(kl_to_cb.next, w.harrenhal.0);
    }
}

// ── Configuration and observers ───────────────────────────────────────────────

#[cfg(test)]
mod sync {
    use rt_core::StopId;
    use rt_routing::{RoutingError, SyncConfig, SyncObserver, SyncReport};

    use crate::{NetworkError, StopNetwork};

    #[test]
    fn default_config_is_unbounded() {
        assert_eq!(StopNetwork::new().config().max_sweeps, None);
    }

    #[test]
    fn sweep_limit_surfaces_as_routing_error() {
        let mut net = StopNetwork::with_config(SyncConfig { max_sweeps: Some(1) });
        let a = net.add_stop("A", 0, 0).unwrap();
        let b = net.add_stop("B", 0, 3).unwrap();
        let err = net.connect(a, b).unwrap_err();
        assert!(matches!(err, NetworkError::Routing(RoutingError::NotConverged { sweeps: 1, .. })));
    }

    #[derive(Default)]
    struct Converged(Vec<(StopId, SyncReport)>);

    impl SyncObserver for Converged {
        fn on_converged(&mut self, home: StopId, report: &SyncReport) {
            self.0.push((home, *report));
        }
    }

    #[test]
    fn observer_hooks() {
        let mut net = StopNetwork::new();
        let a = net.add_stop("A", 0, 0).unwrap();
        let b = net.add_stop("B", 0, 3).unwrap();

        let mut seen = Converged::default();
        let report = net.add_neighbour_with(a, b, &mut seen).unwrap();
        net.synchronise_with(b, &mut seen).unwrap();

        assert_eq!(seen.0.len(), 2);
        assert_eq!(seen.0[0], (a, report));
        assert_eq!(seen.0[1].0, b);
        assert!(seen.0[1].1.is_quiescent());
    }
}
