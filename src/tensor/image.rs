use super::Tensor;
use crate::errors::ModelError;
use image::{GrayImage, Luma};
use std::path::Path;

impl Tensor {
    /// 将取值在[0,1]的灰度图张量转为`image`库的`GrayImage`。
    /// 接受`[height, width]`或单通道`[1, height, width]`，像素按`round(x * 255)`量化，越界值被截断。
    pub fn to_gray_image(&self) -> Result<GrayImage, ModelError> {
        let (height, width) = match self.shape() {
            &[h, w] => (h, w),
            &[1, h, w] => (h, w),
            other => {
                return Err(ModelError::shape_mismatch(
                    &[1, 0, 0],
                    other,
                    "灰度图像张量应为[H, W]或[1, H, W]",
                ));
            }
        };
        let pixels = self.reshape(&[height, width]);
        let view = pixels.view();

        let mut imgbuf = GrayImage::new(width as u32, height as u32);
        for y in 0..height {
            for x in 0..width {
                let value = view[[y, x]].clamp(0.0, 1.0);
                let pixel = (value * 255.0).round() as u8;
                imgbuf.put_pixel(x as u32, y as u32, Luma([pixel]));
            }
        }
        Ok(imgbuf)
    }

    /// 保存为灰度图像文件，格式由扩展名决定（如`.png`）
    pub fn save_gray_image<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        self.to_gray_image()?.save(path.as_ref())?;
        Ok(())
    }
}
