/// 关键帧
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// 时间 (毫秒)
    pub time: f32,
    /// 值
    pub value: f32,
}

/// 标量关键帧轨道，相邻关键帧之间线性插值
///
/// 同一时间点允许存在多个关键帧，后加入的排在后面，
/// 用于表达零时长的跳变（例如旋转 360° 之后归零）。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyframeTrack {
    /// 关键帧列表，按时间升序
    pub keyframes: Vec<Keyframe>,
}

impl KeyframeTrack {
    pub fn new() -> Self {
        Self { keyframes: Vec::new() }
    }

    /// 从 `from` 线性过渡到 `to`
    pub fn linear(from: f32, to: f32, duration: f32) -> Self {
        let mut track = Self::new();
        track.add_keyframe(0.0, from);
        track.add_keyframe(duration, to);
        track
    }

    /// 三角波：前半段从 `base` 到 `peak`，后半段回到 `base`
    pub fn triangle(base: f32, peak: f32, duration: f32) -> Self {
        let mut track = Self::new();
        track.add_keyframe(0.0, base);
        track.add_keyframe(duration / 2.0, peak);
        track.add_keyframe(duration, base);
        track
    }

    /// 添加关键帧
    pub fn add_keyframe(&mut self, time: f32, value: f32) {
        // 按时间排序插入，相同时间插在已有关键帧之后
        let index = self.keyframes.partition_point(|k| k.time <= time);
        self.keyframes.insert(index, Keyframe { time, value });
    }

    /// 追加一个零时长跳变
    pub fn snap_to(mut self, value: f32) -> Self {
        let time = self.duration();
        self.add_keyframe(time, value);
        self
    }

    /// 轨道时长，即最后一个关键帧的时间
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map(|k| k.time).unwrap_or(0.0)
    }

    /// 轨道终点值
    pub fn end_value(&self) -> Option<f32> {
        self.keyframes.last().map(|k| k.value)
    }

    /// 获取指定时间的值
    pub fn sample(&self, time: f32) -> Option<f32> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;

        if time <= first.time {
            return Some(first.value);
        }
        if time >= last.time {
            return Some(last.value);
        }

        // first.time < time < last.time，所以 index 落在 1..len
        let index = self.keyframes.partition_point(|k| k.time <= time);
        let k0 = &self.keyframes[index - 1];
        let k1 = &self.keyframes[index];

        let span = k1.time - k0.time;
        if span <= 0.0 {
            return Some(k1.value);
        }
        let t = (time - k0.time) / span;
        Some(k0.value + (k1.value - k0.value) * t)
    }
}
