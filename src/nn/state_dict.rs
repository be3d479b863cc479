/*
 * @Date         : 2026-10-19
 * @Description  : 参数字典（键 -> 张量）及其二进制序列化（save/load）
 *
 * 文件格式（小端序）：
 *   magic "MVAE" | u32 版本 | u32 参数个数 |
 *   每个参数：u32 名称长度 | UTF-8 名称 | u32 阶数 | 阶数 × u32 各维长度 | 元素个数 × f32 数据
 *
 * f32 按原始比特写入，save(load(x)) 与 x 逐位一致。
 * @LastEditTime : 2026-10-19
 */

use crate::errors::ModelError;
use crate::tensor::Tensor;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// 有序的参数字典。键的顺序即写入文件的顺序，保证同一模型多次保存得到相同的字节。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateDict {
    entries: BTreeMap<String, Tensor>,
}

impl StateDict {
    /// 参数文件魔数
    const PARAMS_MAGIC: &'static [u8; 4] = b"MVAE";
    /// 参数文件版本
    const PARAMS_VERSION: u32 = 1;
    /// 参数名的最大字节数
    const MAX_NAME_LEN: usize = 4096;
    /// 参数张量的最大阶数
    const MAX_RANK: usize = 8;

    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个参数，若键已存在则返回被替换的旧值
    pub fn insert(&mut self, key: impl Into<String>, tensor: Tensor) -> Option<Tensor> {
        self.entries.insert(key.into(), tensor)
    }

    pub fn get(&self, key: &str) -> Option<&Tensor> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Tensor> {
        self.entries.iter()
    }

    /// 给每个键加上命名空间前缀：`enc_fc1.weight` -> `{prefix}.enc_fc1.weight`
    pub fn with_prefix(&self, prefix: &str) -> StateDict {
        let entries = self
            .entries
            .iter()
            .map(|(key, tensor)| (format!("{prefix}.{key}"), tensor.clone()))
            .collect();
        StateDict { entries }
    }

    /// 去掉键开头的`{prefix}.`；不带该前缀的键原样保留。
    /// 若去前缀后与已有键重名，带前缀的那一项胜出。
    pub fn strip_prefix(&self, prefix: &str) -> StateDict {
        let namespace = format!("{prefix}.");
        let mut entries = BTreeMap::new();
        for (key, tensor) in &self.entries {
            if !key.starts_with(&namespace) {
                entries.entry(key.clone()).or_insert_with(|| tensor.clone());
            }
        }
        for (key, tensor) in &self.entries {
            if let Some(stripped) = key.strip_prefix(&namespace) {
                entries.insert(stripped.to_string(), tensor.clone());
            }
        }
        StateDict { entries }
    }

    /// 校验本字典能否严格加载到`expected`描述的结构中：
    /// 键集合必须相同，同名参数的形状必须一致。
    pub fn check_compatible(&self, expected: &StateDict) -> Result<(), ModelError> {
        let missing: Vec<String> = expected
            .keys()
            .filter(|key| !self.contains_key(key))
            .map(str::to_string)
            .collect();
        let unexpected: Vec<String> = self
            .keys()
            .filter(|key| !expected.contains_key(key))
            .map(str::to_string)
            .collect();
        let shape_mismatched: Vec<String> = expected
            .iter()
            .filter_map(|(key, want)| {
                let got = self.get(key)?;
                (!got.is_same_shape(want)).then(|| {
                    format!("{key}: 期望 {:?}, 实际 {:?}", want.shape(), got.shape())
                })
            })
            .collect();

        if missing.is_empty() && unexpected.is_empty() && shape_mismatched.is_empty() {
            Ok(())
        } else {
            Err(ModelError::IncompatibleCheckpoint {
                missing,
                unexpected,
                shape_mismatched,
            })
        }
    }

    /// 保存所有参数到二进制文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);

        writer.write_all(Self::PARAMS_MAGIC)?;
        writer.write_all(&Self::PARAMS_VERSION.to_le_bytes())?;
        writer.write_all(&(self.entries.len() as u32).to_le_bytes())?;

        for (name, tensor) in &self.entries {
            let name_bytes = name.as_bytes();
            writer.write_all(&(name_bytes.len() as u32).to_le_bytes())?;
            writer.write_all(name_bytes)?;

            let shape = tensor.shape();
            writer.write_all(&(shape.len() as u32).to_le_bytes())?;
            for &dim in shape {
                writer.write_all(&(dim as u32).to_le_bytes())?;
            }
            for val in tensor.to_vec() {
                writer.write_all(&val.to_le_bytes())?;
            }
            debug!(name = %name, shape = ?shape, "写入参数");
        }
        writer.flush()?;

        info!(path = %path.display(), params = self.entries.len(), "参数已保存");
        Ok(())
    }

    /// 从二进制文件加载参数
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ModelError::FileNotFound(path.to_path_buf()),
            _ => ModelError::Io(e),
        })?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != Self::PARAMS_MAGIC {
            return Err(ModelError::InvalidFormat(
                "魔数不匹配：这不是本库保存的参数文件，请确保使用 StateDict::save() 保存的文件"
                    .to_string(),
            ));
        }

        let version = read_u32(&mut reader)?;
        if version != Self::PARAMS_VERSION {
            return Err(ModelError::UnsupportedVersion(version));
        }

        let param_count = read_u32(&mut reader)?;
        let mut state = StateDict::new();
        for _ in 0..param_count {
            let name_len = read_u32(&mut reader)? as usize;
            if name_len > Self::MAX_NAME_LEN {
                return Err(ModelError::InvalidFormat(format!("名称长度异常: {name_len}")));
            }
            let mut name_bytes = vec![0u8; name_len];
            reader.read_exact(&mut name_bytes)?;
            let name = String::from_utf8(name_bytes)
                .map_err(|e| ModelError::InvalidFormat(format!("名称编码无效: {e}")))?;

            let rank = read_u32(&mut reader)? as usize;
            if rank > Self::MAX_RANK {
                return Err(ModelError::InvalidFormat(format!("参数 {name} 的阶数异常: {rank}")));
            }
            let mut shape = Vec::with_capacity(rank);
            for _ in 0..rank {
                shape.push(read_u32(&mut reader)? as usize);
            }

            let data_len = shape
                .iter()
                .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
                .ok_or_else(|| {
                    ModelError::InvalidFormat(format!("参数 {name} 的形状 {shape:?} 过大"))
                })?;
            // 容量设上限，损坏文件中的超大形状只会在读到末尾时报 IO 错误
            let mut data = Vec::with_capacity(data_len.min(1 << 20));
            for _ in 0..data_len {
                let mut val_bytes = [0u8; 4];
                reader.read_exact(&mut val_bytes)?;
                data.push(f32::from_le_bytes(val_bytes));
            }

            if state.insert(name.clone(), Tensor::new(&data, &shape)).is_some() {
                return Err(ModelError::InvalidFormat(format!("参数名重复: {name}")));
            }
        }

        info!(path = %path.display(), params = state.len(), "参数已加载");
        Ok(state)
    }
}

impl<'a> IntoIterator for &'a StateDict {
    type Item = (&'a String, &'a Tensor);
    type IntoIter = btree_map::Iter<'a, String, Tensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, ModelError> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}
