//! Segmentkette mit C0/C1-Stetigkeitspflege.

use glam::DVec3;

use super::segment::{reflect_through, BezierSegment, SEGMENT_POINTS};

/// Basis-Kontrollpunkte, aus denen die Startkette abgeleitet wird.
const SEED_BASE: [DVec3; SEGMENT_POINTS] = [
    DVec3::new(-2.0, -2.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(2.0, -2.0, 0.0),
];

/// Geordnete Kette kubischer Bezier-Segmente.
///
/// Einfuegereihenfolge = Kurvenreihenfolge von links nach rechts. Die Kette
/// besitzt alle Segmente exklusiv; die Stetigkeitspflege arbeitet ueber
/// (Segment-, Punkt-)Indizes statt ueber Zeiger in verschachtelte Container.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentChain {
    segments: Vec<BezierSegment>,
}

impl SegmentChain {
    /// Erstellt eine Kette aus vorgefertigten Segmenten.
    pub fn new(segments: Vec<BezierSegment>) -> Self {
        Self { segments }
    }

    /// Baut die Startkette aus den Basis-Punkten auf.
    ///
    /// Segment i ist die Basis um i Kurvenbreiten nach rechts verschoben;
    /// bei ungeradem i zeigen die Handles nach unten (wechselnde Boegen).
    /// Anschliessend laeuft die Stetigkeitspflege einmal von links nach
    /// rechts, damit schon die Startgeometrie C0/C1 erfuellt.
    pub fn seeded(curve_count: usize) -> Self {
        let [p0, p1, p2, p3] = SEED_BASE;
        let mut segments = Vec::with_capacity(curve_count);
        for i in 0..curve_count {
            let translate = DVec3::new((p3.x - p0.x) * i as f64, 0.0, 0.0);
            let flip = if i % 2 == 0 {
                DVec3::ZERO
            } else {
                DVec3::new(0.0, (p1.y - p0.y) * -2.0, 0.0)
            };
            segments.push(BezierSegment::new(
                p0 + translate,
                p1 + translate + flip,
                p2 + translate + flip,
                p3 + translate,
            ));
        }

        let mut chain = Self { segments };
        for i in 1..chain.segments.len() {
            chain.restore_continuity(i - 1, SEGMENT_POINTS - 1);
        }
        chain
    }

    /// Anzahl Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Read-only Sicht auf alle Segmente.
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// Liefert ein Segment, falls der Index gueltig ist.
    pub fn segment(&self, index: usize) -> Option<&BezierSegment> {
        self.segments.get(index)
    }

    /// Liest einen Kontrollpunkt.
    pub fn point(&self, segment: usize, point: usize) -> Option<DVec3> {
        self.segments
            .get(segment)
            .and_then(|s| s.points.get(point).copied())
    }

    /// Verschiebt einen Kontrollpunkt um ein Delta und stellt anschliessend
    /// die Stetigkeit zu den Nachbarsegmenten wieder her.
    ///
    /// Verschiebung und Propagation laufen in einem Zug, ein Leser sieht nie
    /// einen halb angewendeten Zustand. Ungueltige Indizes sind ein No-op.
    pub fn move_point(&mut self, segment: usize, point: usize, delta: DVec3) {
        let Some(seg) = self.segments.get_mut(segment) else {
            return;
        };
        let Some(p) = seg.points.get_mut(point) else {
            return;
        };
        *p += delta;
        self.restore_continuity(segment, point);
    }

    /// Stellt die C0/C1-Invarianten nach einer Aenderung am Punkt
    /// (`segment`, `point`) wieder her.
    ///
    /// Es feuert genau die Regel, deren Indexbedingung zutrifft:
    /// - letzter Punkt, nicht letztes Segment: Endpunkt ins Folgesegment
    ///   kopieren (C0) und dessen Handle spiegeln (C1)
    /// - erster Punkt, nicht erstes Segment: symmetrisch rueckwaerts
    /// - vorletzter Punkt, nicht letztes Segment: nur Handle-Spiegelung
    ///   vorwaerts (der gemeinsame Endpunkt hat sich nicht bewegt)
    /// - zweiter Punkt, nicht erstes Segment: nur Handle-Spiegelung
    ///   rueckwaerts
    pub fn restore_continuity(&mut self, segment: usize, point: usize) {
        if segment >= self.segments.len() {
            return;
        }
        let last = SEGMENT_POINTS - 1;

        if point == last && segment + 1 < self.segments.len() {
            let endpoint = self.segments[segment].points[last];
            let handle = self.segments[segment].points[last - 1];
            self.segments[segment + 1].points[0] = endpoint;
            self.segments[segment + 1].points[1] = reflect_through(endpoint, handle);
        } else if point == 0 && segment > 0 {
            let endpoint = self.segments[segment].points[0];
            let handle = self.segments[segment].points[1];
            self.segments[segment - 1].points[last] = endpoint;
            self.segments[segment - 1].points[last - 1] = reflect_through(endpoint, handle);
        } else if point == last - 1 && segment + 1 < self.segments.len() {
            let endpoint = self.segments[segment].points[last];
            let handle = self.segments[segment].points[last - 1];
            self.segments[segment + 1].points[1] = reflect_through(endpoint, handle);
        } else if point == 1 && segment > 0 {
            let endpoint = self.segments[segment].points[0];
            let handle = self.segments[segment].points[1];
            self.segments[segment - 1].points[last - 1] = reflect_through(endpoint, handle);
        }
    }

    /// Prueft die C0-Invariante ueber alle benachbarten Segmentpaare
    /// (exakter Vergleich, der Endpunkt wird bitgleich kopiert).
    pub fn is_c0_continuous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end() == pair[1].start())
    }
}

impl Default for SegmentChain {
    fn default() -> Self {
        Self::seeded(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_chain_is_continuous() {
        let chain = SegmentChain::seeded(3);
        assert_eq!(chain.segment_count(), 3);
        assert!(chain.is_c0_continuous());

        // C1: Handle des Folgesegments ist die Spiegelung des vorigen
        for i in 0..chain.segment_count() - 1 {
            let previous = chain.segment(i).expect("Segment erwartet");
            let next = chain.segment(i + 1).expect("Folgesegment erwartet");
            assert_eq!(
                next.points[1],
                reflect_through(previous.points[3], previous.points[2])
            );
        }
    }

    #[test]
    fn test_seeded_first_segment_matches_base_points() {
        let chain = SegmentChain::seeded(2);
        let first = chain.segment(0).expect("Segment erwartet");
        assert_eq!(first.points[0], DVec3::new(-2.0, -2.0, 0.0));
        assert_eq!(first.points[1], DVec3::new(-1.0, 1.0, 0.0));
        assert_eq!(first.points[2], DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(first.points[3], DVec3::new(2.0, -2.0, 0.0));
    }

    #[test]
    fn test_move_endpoint_propagates_forward() {
        let mut chain = SegmentChain::seeded(2);
        let old_handle = chain.point(0, 2).expect("P2 erwartet");

        chain.move_point(0, 3, DVec3::new(0.2, 0.0, 0.0));

        let moved = chain.point(0, 3).expect("P3 erwartet");
        assert_eq!(moved, DVec3::new(2.2, -2.0, 0.0));
        // C0: bitgleiche Kopie des Endpunkts
        assert_eq!(chain.point(1, 0), Some(moved));
        // C1: Spiegelung des alten Handles durch den neuen Endpunkt
        assert_eq!(chain.point(1, 1), Some(reflect_through(moved, old_handle)));
        assert_eq!(chain.point(1, 1), Some(DVec3::new(3.4, -5.0, 0.0)));
    }

    #[test]
    fn test_move_start_propagates_backward() {
        let mut chain = SegmentChain::seeded(2);

        chain.move_point(1, 0, DVec3::new(0.0, 0.4, 0.0));

        let moved = chain.point(1, 0).expect("P0 erwartet");
        let handle = chain.point(1, 1).expect("P1 erwartet");
        assert_eq!(chain.point(0, 3), Some(moved));
        assert_eq!(chain.point(0, 2), Some(reflect_through(moved, handle)));
        assert!(chain.is_c0_continuous());
    }

    #[test]
    fn test_move_handle_mirrors_without_endpoint_copy() {
        let mut chain = SegmentChain::seeded(2);
        let endpoint_before = chain.point(0, 3).expect("P3 erwartet");
        let next_start_before = chain.point(1, 0).expect("P0 erwartet");

        chain.move_point(0, 2, DVec3::new(0.0, -0.2, 0.0));

        // Der gemeinsame Endpunkt hat sich nicht bewegt
        assert_eq!(chain.point(0, 3), Some(endpoint_before));
        assert_eq!(chain.point(1, 0), Some(next_start_before));
        // Nur der Handle des Folgesegments wurde gespiegelt
        let handle = chain.point(0, 2).expect("P2 erwartet");
        assert_eq!(
            chain.point(1, 1),
            Some(reflect_through(endpoint_before, handle))
        );
    }

    #[test]
    fn test_move_second_point_mirrors_backward() {
        let mut chain = SegmentChain::seeded(2);

        chain.move_point(1, 1, DVec3::new(0.2, 0.2, 0.0));

        let start = chain.point(1, 0).expect("P0 erwartet");
        let handle = chain.point(1, 1).expect("P1 erwartet");
        assert_eq!(chain.point(0, 2), Some(reflect_through(start, handle)));
    }

    #[test]
    fn test_terminal_edits_do_not_propagate() {
        let mut chain = SegmentChain::seeded(2);
        let first_before = *chain.segment(0).expect("Segment erwartet");

        // Letzter Punkt des letzten Segments: kein Folgesegment
        chain.move_point(1, 3, DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(chain.segment(0), Some(&first_before));

        // Erster Punkt des ersten Segments: kein Vorgaenger
        let second_before = *chain.segment(1).expect("Segment erwartet");
        chain.move_point(0, 0, DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(chain.segment(1), Some(&second_before));
    }

    #[test]
    fn test_move_with_invalid_indices_is_noop() {
        let mut chain = SegmentChain::seeded(2);
        let before = chain.clone();

        chain.move_point(5, 0, DVec3::new(1.0, 1.0, 1.0));
        chain.move_point(0, 7, DVec3::new(1.0, 1.0, 1.0));

        assert_eq!(chain, before);
    }

    #[test]
    fn test_continuity_survives_move_sequences() {
        let mut chain = SegmentChain::seeded(3);
        let moves = [
            (0, 3, DVec3::new(0.2, 0.0, 0.0)),
            (1, 0, DVec3::new(0.0, -0.2, 0.0)),
            (1, 3, DVec3::new(0.2, 0.2, 0.0)),
            (2, 1, DVec3::new(-0.2, 0.0, 0.0)),
            (1, 2, DVec3::new(0.0, 0.4, 0.0)),
        ];

        for (segment, point, delta) in moves {
            chain.move_point(segment, point, delta);
            assert!(chain.is_c0_continuous(), "C0 verletzt nach Move");
        }
    }
}
