use anyhow::{ensure, Result};


/// 区間和セグメント木, 長さ N の整数列に対して一点更新と任意閉区間の総和クエリを以下の計算量で行う.
/// 更新: O(log N), クエリ: O(log N)
///
/// 節の値は i64 で保持するので, i32 の列をいくら足し合わせても途中で溢れない.
#[derive(Debug)]
pub struct RangeSumTree {
    values: Vec<i32>,
    nodes: Vec<i64>,
}

impl RangeSumTree {
    /// 初期数列から木を構築する. 空の数列からは節を持たない木ができる.
    pub fn build(values: Vec<i32>) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                values,
                nodes: vec![],
            };
        }
        let mut tree = Self {
            values,
            nodes: vec![0; 2 * n.next_power_of_two() - 1],
        };
        tree.construct(0, n - 1, 0);
        tree
    }

    fn construct(&mut self, start: usize, end: usize, index: usize) -> i64 {
        if start == end {
            // Leaf node.
            self.nodes[index] = self.values[start] as i64;
            return self.nodes[index];
        }
        let mid = start + (end - start) / 2;
        self.nodes[index] = self.construct(start, mid, 2 * index + 1)
            + self.construct(mid + 1, end, 2 * index + 2);
        self.nodes[index]
    }

    /// 閉区間 `[start, end]` にある要素の総和を求める.
    ///
    /// 区間は任意の整数でよく, 添字範囲 [0, N-1] と交差する部分だけが合計される.
    /// 交差しない区間 (逆転した区間を含む) の結果は 0 になる.
    pub fn range_sum(&self, start: i64, end: i64) -> i64 {
        if self.values.is_empty() {
            return 0;
        }
        self.sum_in(start, end, 0, self.values.len() - 1, 0)
    }

    fn sum_in(
        &self,
        query_start: i64,
        query_end: i64,
        start: usize,
        end: usize,
        index: usize,
    ) -> i64 {
        if (end as i64) < query_start || (start as i64) > query_end {
            // 節の区間がクエリと交差しない場合
            return 0;
        }
        if query_start <= start as i64 && (end as i64) <= query_end {
            // 節の区間がクエリに完全に含まれる場合
            return self.nodes[index];
        }
        let mid = start + (end - start) / 2;
        self.sum_in(query_start, query_end, start, mid, 2 * index + 1)
            + self.sum_in(query_start, query_end, mid + 1, end, 2 * index + 2)
    }

    /// 添字 `index` の要素を `value` に置き換え, 根から葉への経路上の節を差分で更新する.
    ///
    /// 範囲外の添字はエラーとして報告し, 木は変化しない.
    pub fn update_index(&mut self, index: usize, value: i32) -> Result<()> {
        ensure!(
            index < self.values.len(),
            "index {} out of range for length {}",
            index,
            self.values.len()
        );
        let difference = value as i64 - self.values[index] as i64;
        self.values[index] = value;
        self.add_on_path(0, self.values.len() - 1, index, 0, difference);
        Ok(())
    }

    fn add_on_path(
        &mut self,
        start: usize,
        end: usize,
        target: usize,
        index: usize,
        difference: i64,
    ) {
        self.nodes[index] += difference;
        if start == end {
            return;
        }
        let mid = start + (end - start) / 2;
        if target <= mid {
            self.add_on_path(start, mid, target, 2 * index + 1, difference);
        } else {
            self.add_on_path(mid + 1, end, target, 2 * index + 2, difference);
        }
    }

    /// 数列の長さを返す.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 添字 `index` の現在の値を返す. 範囲外は `None`.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// 数列全体の総和. 空の木では 0.
    pub fn total(&self) -> i64 {
        self.nodes.first().copied().unwrap_or(0)
    }
}
