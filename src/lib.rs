mod seg_tree;

pub use seg_tree::RangeSumTree;
