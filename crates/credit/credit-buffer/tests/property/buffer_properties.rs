use std::collections::HashMap;

use credit_buffer::{kernel, CreditBuffer, SubmitOutcome};
use credit_core::Frame;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Submit(f64),
    Drain,
    Flush,
}

fn arb_reward() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        4 => -2.0f64..2.0,
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => arb_reward().prop_map(Op::Submit),
        2 => Just(Op::Drain),
        1 => Just(Op::Flush),
    ]
}

fn arb_buffer() -> impl Strategy<Value = CreditBuffer<u32>> {
    (1usize..16, 0.05f64..=1.0, 0usize..20)
        .prop_map(|(capacity, decay, min_retain)| {
            CreditBuffer::new(capacity, decay, min_retain).unwrap()
        })
}

fn rewards_by_id(buffer: &CreditBuffer<u32>) -> HashMap<u32, f64> {
    buffer.iter().map(|f| (f.observation, f.reward)).collect()
}

fn finalized(buffer: &CreditBuffer<u32>) -> Vec<(u32, f64)> {
    buffer
        .iter()
        .skip(buffer.pending_count())
        .map(|f| (f.observation, f.reward))
        .collect()
}

// ── Horizon bounds ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn horizon_stays_within_bounds(
        mut buffer in arb_buffer(),
        ops in prop::collection::vec(arb_op(), 0..200),
    ) {
        let mut next_id = 0u32;
        for op in ops {
            match op {
                Op::Submit(r) => { buffer.submit(Frame::new(next_id, r)); next_id += 1; }
                Op::Drain => buffer.drain_finalized().for_each(drop),
                Op::Flush => buffer.flush_all().for_each(drop),
            }
            let bound = buffer.capacity().min(buffer.len());
            prop_assert!(buffer.pending_count() <= bound);
            prop_assert_eq!(
                buffer.pending_unresolved_count(),
                buffer.len() - buffer.pending_count()
            );
        }
    }
}

// ── Finalized frames are frozen ──────────────────────────────────────────

proptest! {
    #[test]
    fn finalized_frames_are_never_mutated(
        mut buffer in arb_buffer(),
        rewards in prop::collection::vec(arb_reward(), 1..120),
    ) {
        for (id, r) in rewards.into_iter().enumerate() {
            let frozen = finalized(&buffer);
            buffer.submit(Frame::new(id as u32, r));
            let now = rewards_by_id(&buffer);
            for (fid, reward) in frozen {
                let after = now.get(&fid).copied();
                prop_assert_eq!(after.map(f64::to_bits), Some(reward.to_bits()));
            }
        }
    }
}

// ── Conservation on the continuing branch ────────────────────────────────

proptest! {
    #[test]
    fn continuing_submit_adds_exactly_the_kernel_share(
        mut buffer in arb_buffer(),
        warmup in prop::collection::vec(arb_reward(), 0..40),
        r in prop_oneof![0.01f64..3.0, -3.0f64..-0.01],
    ) {
        for (id, reward) in warmup.into_iter().enumerate() {
            buffer.submit(Frame::new(id as u32 + 1, reward));
        }
        let before: Vec<f64> = buffer.iter().map(|f| f.reward).collect();
        let total_before: f64 = before.iter().sum();

        let outcome = buffer.submit(Frame::new(0, r));
        let credited = match outcome {
            SubmitOutcome::Continued { credited } => credited,
            SubmitOutcome::Terminal { .. } => unreachable!("nonzero reward"),
        };

        let after: Vec<f64> = buffer.iter().map(|f| f.reward).collect();
        prop_assert_eq!(after[0], 0.0);
        prop_assert_eq!(after.len(), before.len() + 1);

        let total_after: f64 = after.iter().sum();
        let expected = r * kernel::total_weight(buffer.decay(), buffer.causal_lag(), credited);
        let scale = 1.0 + before.iter().map(|x| x.abs()).sum::<f64>() + expected.abs();
        prop_assert!(
            ((total_after - total_before) - expected).abs() <= 1e-9 * scale,
            "added {} expected {}",
            total_after - total_before,
            expected
        );
        for (i, b) in before.iter().enumerate().skip(credited) {
            prop_assert_eq!(after[i + 1].to_bits(), b.to_bits());
        }
    }
}

// ── Delivery: exactly once, in order ─────────────────────────────────────

proptest! {
    #[test]
    fn every_frame_is_delivered_or_discarded_exactly_once(
        mut buffer in arb_buffer(),
        ops in prop::collection::vec(arb_op(), 0..200),
    ) {
        let mut next_id = 0u32;
        let mut delivered: Vec<u32> = Vec::new();
        for op in ops {
            match op {
                Op::Submit(r) => { buffer.submit(Frame::new(next_id, r)); next_id += 1; }
                Op::Drain => {
                    let horizon = buffer.pending_count();
                    let resident: Vec<u32> = buffer.iter().map(|f| f.observation).collect();
                    let drained: Vec<u32> =
                        buffer.drain_finalized().map(|f| f.observation).collect();
                    // Drain never reaches into the pending horizon.
                    for id in &drained {
                        let idx = resident.iter().position(|r| r == id).unwrap();
                        prop_assert!(idx >= horizon);
                    }
                    delivered.extend(drained);
                }
                Op::Flush => delivered.extend(buffer.flush_all().map(|f| f.observation)),
            }
            let stats = buffer.stats();
            prop_assert_eq!(stats.accounted(buffer.len()), stats.submitted);
        }
        delivered.extend(buffer.flush_all().map(|f| f.observation));

        prop_assert!(delivered.windows(2).all(|w| w[0] < w[1]));
        let stats = buffer.stats();
        prop_assert_eq!(stats.submitted, u64::from(next_id));
        prop_assert_eq!(stats.delivered, delivered.len() as u64);
        prop_assert_eq!(stats.delivered + stats.discarded(), stats.submitted);
    }
}

// ── Flush leaves nothing behind ──────────────────────────────────────────

proptest! {
    #[test]
    fn flush_is_idempotent(
        mut buffer in arb_buffer(),
        rewards in prop::collection::vec(arb_reward(), 0..80),
    ) {
        for (id, r) in rewards.into_iter().enumerate() {
            buffer.submit(Frame::new(id as u32, r));
        }
        let first = buffer.flush_all().count();
        prop_assert!(first <= buffer.stats().submitted as usize);
        prop_assert_eq!(buffer.flush_all().count(), 0);
        prop_assert_eq!(buffer.len(), 0);
        prop_assert_eq!(buffer.pending_count(), 0);
        prop_assert_eq!(buffer.pending_unresolved_count(), 0);
    }
}
